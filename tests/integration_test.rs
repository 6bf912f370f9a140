use chat_dispatch::types::{ChatPayload, Message, Role, MAX_TOKENS, TEMPERATURE, TOP_P};
use chat_dispatch::{Dispatcher, DispatcherConfig, Error};
use serde_json::json;

#[tokio::test]
async fn test_dispatcher_creation() {
    let dispatcher = Dispatcher::new();
    assert!(dispatcher.is_ok());

    let client = reqwest::Client::new();
    let _dispatcher = Dispatcher::with_client(client);
}

#[test]
fn test_payload_building() {
    let payload = ChatPayload::user("Hello, world!");

    assert_eq!(payload.messages, vec![Message::user("Hello, world!")]);
    assert_eq!(payload.messages[0].role, Role::User);
    assert_eq!(payload.temperature, TEMPERATURE);
    assert_eq!(payload.top_p, TOP_P);
    assert_eq!(payload.max_tokens, MAX_TOKENS);
}

#[test]
fn test_payload_keeps_special_characters() {
    let content = "Quotes \" and newlines\nand unicode: 22°C";
    let payload = ChatPayload::user(content);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["messages"][0]["content"], json!(content));
}

#[test]
fn test_config_creation() {
    let config = DispatcherConfig::new("https://example.test/chat", "key").unwrap();
    assert_eq!(config.endpoint(), "https://example.test/chat");
    assert_eq!(config.api_key(), "key");

    assert!(DispatcherConfig::new("", "key").unwrap_err().is_config());
    assert!(DispatcherConfig::new("https://example.test/chat", "")
        .unwrap_err()
        .is_config());
}

#[test]
fn test_error_creation() {
    let config_error = Error::config("API_ENDPOINT or API_KEY is missing in the environment");
    assert!(config_error.to_string().contains("Invalid configuration"));
    assert!(config_error.status().is_none());
}
