use chat_dispatch::cli::{read_message, render_response};
use chat_dispatch::Dispatcher;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Variables already in the environment win over the .env file
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Failed to load .env file: {err}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let message = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match read_message(&mut input, &mut output) {
            Ok(message) => message,
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
    };
    debug!(len = message.len(), "read message from stdin");

    let dispatcher = match Dispatcher::new() {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("{}", err.report());
            return ExitCode::FAILURE;
        }
    };

    match dispatcher.send_message(&message).await {
        Ok(response) => {
            println!("{}", render_response(&response));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}
