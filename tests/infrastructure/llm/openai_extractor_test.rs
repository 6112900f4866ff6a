use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxbook::application::ports::{ExtractionError, MeetingExtractor};
use voxbook::domain::Transcript;
use voxbook::infrastructure::llm::OpenAiMeetingExtractor;

const TEST_TRANSCRIPT: &str = "Set up a thirty minute call on December 26th at noon India time.";

async fn start_mock_chat_server(
    response_status: u16,
    response_body: String,
) -> (
    String,
    Arc<Mutex<Option<serde_json::Value>>>,
    oneshot::Sender<()>,
) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
    let captured_in = Arc::clone(&captured);

    let app = Router::new().route(
        "/chat/completions",
        post(move |Json(payload): Json<serde_json::Value>| {
            let captured = Arc::clone(&captured_in);
            let body = response_body.clone();
            async move {
                captured.lock().unwrap().replace(payload);
                let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                (status, body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

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

fn completion_with_content(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

#[tokio::test]
async fn given_transcript_when_extracting_then_returns_details_and_sends_strict_schema() {
    let response = completion_with_content(
        r#"{"duration_minutes": 30, "start_timestamp": "2024-12-26T12:00:00+05:30"}"#,
    );
    let (base_url, captured, shutdown_tx) = start_mock_chat_server(200, response).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let details = extractor
        .extract(&Transcript::new(TEST_TRANSCRIPT))
        .await
        .unwrap();

    assert_eq!(details.duration_minutes, 30);
    assert_eq!(details.start_timestamp, "2024-12-26T12:00:00+05:30");
    chrono::DateTime::parse_from_rfc3339(&details.start_timestamp).unwrap();

    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "gpt-4o");
    assert_eq!(request["max_tokens"], 50);
    assert_eq!(request["temperature"], 0.0);
    assert_eq!(request["response_format"]["type"], "json_schema");
    assert_eq!(request["response_format"]["json_schema"]["name"], "meeting_schema");
    assert_eq!(
        request["response_format"]["json_schema"]["schema"]["additionalProperties"],
        false
    );

    assert_eq!(request["messages"][0]["role"], "user");
    let prompt = request["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains(TEST_TRANSCRIPT));
    assert!(prompt.contains("duration_minutes"));
    assert!(prompt.contains("ISO 8601"));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_content_when_extracting_then_returns_invalid_response() {
    let response = completion_with_content("The meeting starts at noon and lasts half an hour.");
    let (base_url, _captured, shutdown_tx) = start_mock_chat_server(200, response).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let result = extractor.extract(&Transcript::new(TEST_TRANSCRIPT)).await;

    assert!(matches!(result, Err(ExtractionError::InvalidResponse(_))));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_content_missing_field_when_extracting_then_returns_invalid_response() {
    let response = completion_with_content(r#"{"duration_minutes": 30}"#);
    let (base_url, _captured, shutdown_tx) = start_mock_chat_server(200, response).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let result = extractor.extract(&Transcript::new(TEST_TRANSCRIPT)).await;

    match result {
        Err(ExtractionError::InvalidResponse(message)) => {
            assert!(message.contains("start_timestamp"));
        }
        other => panic!("expected InvalidResponse, got {:?}", other),
    }

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_content_with_extra_field_when_extracting_then_returns_invalid_response() {
    let response = completion_with_content(
        r#"{"duration_minutes": 30, "start_timestamp": "2024-12-26T12:00:00+05:30", "attendees": 4}"#,
    );
    let (base_url, _captured, shutdown_tx) = start_mock_chat_server(200, response).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let result = extractor.extract(&Transcript::new(TEST_TRANSCRIPT)).await;

    assert!(matches!(result, Err(ExtractionError::InvalidResponse(_))));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_extracting_then_returns_rate_limited() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(429, r#"{"error": "slow down"}"#.to_string()).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let result = extractor.extract(&Transcript::new(TEST_TRANSCRIPT)).await;

    assert!(matches!(result, Err(ExtractionError::RateLimited)));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_extracting_then_returns_api_request_failed() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(500, r#"{"error": "upstream down"}"#.to_string()).await;

    let extractor = OpenAiMeetingExtractor::new("test-key".to_string(), Some(base_url), None);
    let result = extractor.extract(&Transcript::new(TEST_TRANSCRIPT)).await;

    match result {
        Err(ExtractionError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }

    shutdown_tx.send(()).ok();
}
