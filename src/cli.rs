//! Helpers for the interactive entry point.

use serde_json::Value;
use std::io::{self, BufRead, Write};

/// Prompt shown before reading the user's message.
pub const PROMPT: &str = "Enter your message to the AI: ";

/// Heading printed above a successful response.
pub const RESPONSE_HEADING: &str = "AI Response:";

/// Print [`PROMPT`] to `output` and read one line from `input`.
///
/// The trailing line terminator is stripped; end of input yields an empty
/// message.
pub fn read_message<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Format a response for display under [`RESPONSE_HEADING`].
pub fn render_response(response: &Value) -> String {
    let body = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    format!("{RESPONSE_HEADING}\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_read_message_strips_newline() {
        let mut input = Cursor::new("Hello there\r\nignored second line\n");
        let mut output = Vec::new();

        let message = read_message(&mut input, &mut output).unwrap();
        assert_eq!(message, "Hello there");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_read_message_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let message = read_message(&mut input, &mut output).unwrap();
        assert_eq!(message, "");
    }

    #[test]
    fn test_read_message_keeps_inner_whitespace() {
        let mut input = Cursor::new("  spaced  out  \n");
        let mut output = Vec::new();

        let message = read_message(&mut input, &mut output).unwrap();
        assert_eq!(message, "  spaced  out  ");
    }

    #[test]
    fn test_render_response() {
        let rendered = render_response(&json!({"choices": [{"text": "hi"}]}));
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some(RESPONSE_HEADING));

        let body: String = lines.collect::<Vec<_>>().join("\n");
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({"choices": [{"text": "hi"}]}));
    }
}
