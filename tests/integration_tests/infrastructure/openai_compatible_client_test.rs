use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use pagecraft::application::ports::{ChatMessage, LlmClient, LlmClientError, SamplingParams};
use pagecraft::infrastructure::llm::OpenAiCompatibleClient;

#[derive(Clone, Default)]
struct Captured {
    authorization: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn start_mock_completions_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, Captured, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Captured::default();
    let recorder = captured.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                *recorder.authorization.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *recorder.body.lock().unwrap() = Some(body);
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn prompt() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("be a web developer"),
        ChatMessage {
            role: "user".to_string(),
            content: "a hero".to_string(),
        },
    ]
}

#[tokio::test]
async fn given_completion_when_calling_then_returns_first_choice_content() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"<div>hi</div>"}}]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_completions_server(200, body).await;
    let client = OpenAiCompatibleClient::new(&base_url, "llama3-8b-8192", Duration::from_secs(5));

    let result = client
        .complete("gsk_test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await;

    assert_eq!(result.unwrap(), "<div>hi</div>");
    assert_eq!(
        captured.authorization.lock().unwrap().as_deref(),
        Some("Bearer gsk_test")
    );
    let sent = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(sent["model"], "llama3-8b-8192");
    assert_eq!(sent["max_tokens"], 2000);
    assert_eq!(sent["messages"][0]["role"], "system");
    assert_eq!(sent["messages"][1]["content"], "a hero");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_429_when_calling_then_returns_rate_limited() {
    let body = r#"{"error":{"message":"You exceeded your current quota"}}"#;
    let (base_url, _, shutdown_tx) = start_mock_completions_server(429, body).await;
    let client = OpenAiCompatibleClient::new(&base_url, "gpt-3.5-turbo", Duration::from_secs(5));

    let result = client
        .complete("sk-test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, LlmClientError::RateLimited(_)));
    assert!(error.is_quota_exhausted());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_calling_then_returns_api_request_failed_with_status() {
    let (base_url, _, shutdown_tx) = start_mock_completions_server(500, "upstream down").await;
    let client = OpenAiCompatibleClient::new(&base_url, "gpt-3.5-turbo", Duration::from_secs(5));

    let result = client
        .complete("sk-test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream down"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_choices_when_calling_then_returns_invalid_response() {
    let (base_url, _, shutdown_tx) = start_mock_completions_server(200, r#"{"choices":[]}"#).await;
    let client = OpenAiCompatibleClient::new(&base_url, "gpt-3.5-turbo", Duration::from_secs(5));

    let result = client
        .complete("sk-test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_host_when_calling_then_returns_api_request_failed() {
    let client = OpenAiCompatibleClient::new(
        "http://127.0.0.1:1/v1",
        "gpt-3.5-turbo",
        Duration::from_secs(2),
    );

    let result = client
        .complete("sk-test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_unreachable_host_with_status_like_path_when_calling_then_not_treated_as_quota() {
    let client = OpenAiCompatibleClient::new(
        "http://127.0.0.1:1/429/v1",
        "gpt-3.5-turbo",
        Duration::from_secs(2),
    );

    let error = client
        .complete("sk-test", &prompt(), SamplingParams::COMPONENT_GENERATION)
        .await
        .unwrap_err();

    assert!(matches!(error, LlmClientError::ApiRequestFailed(_)));
    assert!(!error.is_quota_exhausted());
}
