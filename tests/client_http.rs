//! HTTP tests for the vidrecap client.
//!
//! Runs the client and the session against a `wiremock` mock server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidrecap::client::{CHAT_FALLBACK, SUMMARIZE_FALLBACK};
use vidrecap::{
    ChatRequest, ChatResponse, ClientLogger, Control, Error, Field, Page, Region, Role,
    SendOutcome, SummarizeRequest, SummarizeResponse, SummarizerSession, Vidrecap, View,
    submit_line,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn client_for(server: &MockServer) -> Vidrecap {
    Vidrecap::with_options(Some(server.uri()), Some(Duration::from_secs(5)))
        .expect("valid client")
}

fn summary_body() -> serde_json::Value {
    json!({
        "session_id": "s1",
        "summary": "**Hi**",
        "video_metadata": {
            "duration_seconds": 125,
            "segment_count": 4,
            "video_id": "abc"
        }
    })
}

async fn mount_summary(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .mount(server)
        .await;
}

#[derive(Default)]
struct RecordingLogger {
    events: Mutex<Vec<String>>,
}

impl ClientLogger for RecordingLogger {
    fn log_summarize(&self, request: &SummarizeRequest, response: &SummarizeResponse) {
        self.events.lock().unwrap().push(format!(
            "summarize {} -> {}",
            request.youtube_url, response.session_id
        ));
    }

    fn log_chat(&self, request: &ChatRequest, response: &ChatResponse) {
        self.events.lock().unwrap().push(format!(
            "chat {} -> {}",
            request.message, response.response
        ));
    }

    fn log_error(&self, endpoint: &str, error: &Error) {
        self.events
            .lock()
            .unwrap()
            .push(format!("error {endpoint} {:?}", error.status_code()));
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn summarize_posts_url_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .and(body_json(json!({"youtube_url": "https://youtu.be/abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .summarize(SummarizeRequest::new("https://youtu.be/abc"))
        .await
        .unwrap();
    assert_eq!(response.session_id, "s1");
    assert_eq!(response.summary, "**Hi**");
    assert_eq!(response.video_metadata.duration_seconds, 125);
    assert_eq!(response.video_metadata.segment_count, 4);
    assert_eq!(response.video_metadata.video_id, "abc");
}

#[tokio::test]
async fn fractional_durations_are_floored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "s2",
            "summary": "x",
            "video_metadata": {
                "duration_seconds": 59.9,
                "segment_count": 1,
                "video_id": "frac"
            }
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .summarize(SummarizeRequest::new("https://youtu.be/frac"))
        .await
        .unwrap();
    assert_eq!(response.video_metadata.duration_seconds, 59);
    assert_eq!(response.video_metadata.duration_minutes(), 0);
}

#[tokio::test]
async fn error_detail_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "bad url"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .summarize(SummarizeRequest::new("nope"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.user_message("Failed to summarize video"), "bad url");
}

#[tokio::test]
async fn missing_detail_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .summarize(SummarizeRequest::new("https://youtu.be/abc"))
        .await
        .unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.to_string(), "Remote error (500): Failed to summarize video");
}

#[tokio::test]
async fn non_json_error_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .chat(ChatRequest::new("s1", "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(502));
    assert_eq!(err.user_message("unused"), "Failed to get response");
}

#[tokio::test]
async fn chat_posts_session_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"session_id": "s1", "message": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi there"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .chat(ChatRequest::new("s1", "hello"))
        .await
        .unwrap();
    assert_eq!(response.response, "Hi there");
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let health = client_for(&server).health().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn base_path_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recap/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Vidrecap::new(Some(format!("{}/recap", server.uri()))).unwrap();
    assert!(client.health().await.unwrap().is_healthy());
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(summary_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client =
        Vidrecap::with_options(Some(server.uri()), Some(Duration::from_millis(200))).unwrap();
    let err = client
        .summarize(SummarizeRequest::new("https://youtu.be/abc"))
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert_eq!(err.user_message(SUMMARIZE_FALLBACK), SUMMARIZE_FALLBACK);
}

/// A base URL on which nothing is listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client =
        Vidrecap::with_options(Some(closed_port_url()), Some(Duration::from_secs(2))).unwrap();
    let err = client
        .chat(ChatRequest::new("s1", "hello"))
        .await
        .unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert_eq!(err.status_code(), None);
    assert_eq!(err.user_message(CHAT_FALLBACK), CHAT_FALLBACK);
}

#[tokio::test]
async fn unreachable_service_shows_generic_banner() {
    let client =
        Vidrecap::with_options(Some(closed_port_url()), Some(Duration::from_secs(2))).unwrap();
    let mut session = SummarizerSession::new(client, Page::new());
    let err = session.summarize("https://youtu.be/abc").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");

    let page = session.view();
    assert!(page.is_visible(Region::Error));
    assert_eq!(page.error_text(), SUMMARIZE_FALLBACK);
    assert!(!page.is_visible(Region::Loading));
    assert!(!page.is_visible(Region::Summary));
    assert!(!page.is_visible(Region::Chat));
    assert!(page.is_enabled(Control::SummarizeButton));
    assert_eq!(session.session_id(), None);
}

#[tokio::test]
async fn logger_sees_each_round_trip() {
    let server = MockServer::start().await;
    mount_summary(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Session not found"})),
        )
        .mount(&server)
        .await;

    let logger = Arc::new(RecordingLogger::default());
    let client = client_for(&server).with_logger(logger.clone());
    client
        .summarize(SummarizeRequest::new("https://youtu.be/abc"))
        .await
        .unwrap();
    client
        .chat(ChatRequest::new("gone", "hello"))
        .await
        .unwrap_err();

    let events = logger.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            "summarize https://youtu.be/abc -> s1".to_string(),
            "error api/chat Some(404)".to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Session over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_summarizes_and_chats() {
    let server = MockServer::start().await;
    mount_summary(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"session_id": "s1", "message": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi there"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = SummarizerSession::new(client_for(&server), Page::new());
    session.summarize("https://youtu.be/abc").await.unwrap();

    let page = session.view();
    assert_eq!(session.session_id(), Some("s1"));
    assert_eq!(page.summary_html(), "<strong>Hi</strong>");
    assert!(page.metadata_html().contains("Duration: 2 minutes"));
    assert!(page.metadata_html().contains("Segments: 4"));
    assert!(page.metadata_html().contains("Video ID: abc"));
    assert!(page.is_visible(Region::Summary));
    assert!(page.is_visible(Region::Chat));
    assert!(!page.is_visible(Region::Loading));
    assert!(!page.is_visible(Region::Error));
    assert!(page.is_enabled(Control::SummarizeButton));
    assert_eq!(page.focused(), Field::Chat);

    let outcome = session.send_message("hello").await.unwrap();
    assert_eq!(outcome, SendOutcome::Delivered);
    let transcript = session.view().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[0].html, "hello");
    assert_eq!(transcript[1].role, Role::Assistant);
    assert_eq!(transcript[1].html, "Hi there");
    assert!(session.view().is_enabled(Control::SendButton));
}

#[tokio::test]
async fn session_shows_backend_detail_in_banner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid YouTube URL"})),
        )
        .mount(&server)
        .await;

    let mut session = SummarizerSession::new(client_for(&server), Page::new());
    session.summarize("https://example.com").await.unwrap_err();

    let page = session.view();
    assert!(page.is_visible(Region::Error));
    assert_eq!(page.error_text(), "Invalid YouTube URL");
    assert!(!page.is_visible(Region::Summary));
    assert!(!page.is_visible(Region::Chat));
    assert!(!page.is_visible(Region::Loading));
    assert!(page.is_enabled(Control::SummarizeButton));
    assert_eq!(session.session_id(), None);
}

#[tokio::test]
async fn session_renders_chat_failures_inline() {
    let server = MockServer::start().await;
    mount_summary(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut session = SummarizerSession::new(client_for(&server), Page::new());
    session.summarize("https://youtu.be/abc").await.unwrap();
    session.send_message("hello").await.unwrap_err();

    let page = session.view();
    let transcript = page.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].role, Role::Assistant);
    assert_eq!(transcript[1].html, "Error: Failed to get response");
    assert!(!page.is_visible(Region::Error));
    assert!(page.is_enabled(Control::SendButton));
    assert_eq!(session.session_id(), Some("s1"));
}

#[tokio::test]
async fn blank_url_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = SummarizerSession::new(client_for(&server), Page::new());
    let err = session.summarize("   ").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(session.view().error_text(), "Please enter a YouTube URL");
}

#[tokio::test]
async fn typed_lines_drive_the_session() {
    let server = MockServer::start().await;
    mount_summary(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"session_id": "s1", "message": "what is it about?"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "# Topic\n- one"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = SummarizerSession::new(client_for(&server), Page::new());
    submit_line(&mut session, "https://youtu.be/abc").await.unwrap();
    submit_line(&mut session, "  what is it about?  ").await.unwrap();

    let transcript = session.view().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].html, "<h1>Topic</h1><br>• one");
}
