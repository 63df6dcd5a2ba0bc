use std::time::Duration;

use httpmock::Method::POST;
use httpmock::MockServer;
use llm::{ClientConfig, Completer, CompletionError, OpenAiClient};

fn completion_body(content: &str) -> String {
    format!(
        r#"{{
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [{{
                "index": 0,
                "message": {{"role": "assistant", "content": {content}}},
                "finish_reason": "stop",
                "logprobs": null
            }}],
            "usage": null
        }}"#
    )
}

fn client_for(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(ClientConfig::new("test-key").with_api_base(server.base_url()))
}

#[tokio::test]
async fn forwards_prompt_and_returns_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .body_contains("Write a blog post titled 'Bitcoin is the future'");
        then.status(200)
            .header("content-type", "application/json")
            .body(completion_body("\"Bitcoin never sleeps.\""));
    });

    let client = client_for(&server);
    let text = client
        .complete("Write a blog post titled 'Bitcoin is the future'")
        .await
        .unwrap();
    mock.assert();
    assert_eq!(text, "Bitcoin never sleeps.");
}

#[tokio::test]
async fn server_error_is_an_api_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(500).body("upstream exploded");
    });

    let client = client_for(&server);
    let err = client.complete("anything").await.unwrap_err();
    assert!(matches!(err, CompletionError::Api(_)));
}

#[tokio::test]
async fn missing_content_is_an_empty_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(completion_body("null"));
    });

    let client = client_for(&server);
    let err = client.complete("anything").await.unwrap_err();
    assert!(matches!(err, CompletionError::EmptyResponse));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(completion_body("\"too late\""))
            .delay(Duration::from_millis(500));
    });

    let client = OpenAiClient::new(
        ClientConfig::new("test-key")
            .with_api_base(server.base_url())
            .with_timeout(Duration::from_millis(50)),
    );
    let err = client.complete("anything").await.unwrap_err();
    assert!(matches!(err, CompletionError::Timeout(_)));
}
