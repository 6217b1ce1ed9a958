// tests/support/helpers.rs
use super::mocks::SteppingClock;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use boo_api::application::ports::time::Clock;
use boo_api::application::services::ApplicationServices;
use boo_api::domain::comment::CommentRepository;
use boo_api::domain::profile::ProfileRepository;
use boo_api::infrastructure::repositories::{
    InMemoryCommentRepository, InMemoryProfileRepository, MemoryStore,
};
use boo_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_BASE_URL: &str = "http://boo.test";

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl TestContext {
    pub fn router(&self) -> Router {
        router_for(Arc::clone(&self.services))
    }
}

/// Services over a fresh in-memory store with a stepping clock.
pub fn test_context() -> TestContext {
    test_context_with_clock(Arc::new(SteppingClock::default()))
}

pub fn test_context_with_clock(clock: Arc<dyn Clock>) -> TestContext {
    let store = MemoryStore::new();
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(InMemoryProfileRepository::new(Arc::clone(&store)));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(InMemoryCommentRepository::new(store));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&profiles),
        Arc::clone(&comments),
        clock,
    ));

    TestContext {
        services,
        profiles,
        comments,
    }
}

pub fn router_for(services: Arc<ApplicationServices>) -> Router {
    let state = HttpState {
        services,
        public_base_url: TEST_BASE_URL.into(),
    };
    build_router(state, &["*".to_string()])
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|err| panic!("expected JSON body ({err}): {}", self.text))
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");

    TestResponse {
        status,
        content_type,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Checks the success envelope and returns its `data` member.
pub fn assert_success(resp: &TestResponse, expected_status: StatusCode, expected_message: &str) -> Value {
    assert_eq!(resp.status, expected_status, "unexpected status: {}", resp.text);
    let json = resp.json();
    assert_eq!(json["status"], "success");
    assert_eq!(json["statusCode"], expected_status.as_u16());
    assert_eq!(json["message"], expected_message);
    json["data"].clone()
}

/// Checks the error envelope: status, `statusCode` and the title-cased message.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_message: &str) {
    assert_eq!(resp.status, expected_status, "unexpected status: {}", resp.text);
    assert!(
        resp.content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        resp.content_type
    );
    let json = resp.json();
    assert_eq!(json["status"], "error");
    assert_eq!(json["statusCode"], expected_status.as_u16());
    assert_eq!(json["message"], expected_message);
    assert!(json.get("data").is_none());
}

/// Status and envelope only, for messages produced by extractors.
pub fn assert_error_status(resp: &TestResponse, expected_status: StatusCode) {
    assert_eq!(resp.status, expected_status, "unexpected status: {}", resp.text);
    let json = resp.json();
    assert_eq!(json["status"], "error");
    assert_eq!(json["statusCode"], expected_status.as_u16());
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
}
