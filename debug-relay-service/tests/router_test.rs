//! Router-level tests driven with `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use debug_relay_service::services::providers::mock::{MockBehavior, MockCompletionProvider};
use debug_relay_service::startup::{build_router, AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts ERROR-level events.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn state_with(provider: Arc<MockCompletionProvider>) -> AppState {
    AppState {
        config: common::test_config("http://127.0.0.1:1"),
        provider,
    }
}

#[tokio::test]
async fn provider_failure_logs_exactly_one_error() {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let provider = Arc::new(MockCompletionProvider::failing("401 Unauthorized"));
    let app = build_router(state_with(provider.clone()));

    let response = app
        .oneshot(chat_request(r#"{"message": "AttributeError: 'NoneType'"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn validation_failure_logs_no_error() {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let provider = Arc::new(MockCompletionProvider::replying("unused"));
    let app = build_router(state_with(provider.clone()));

    let response = app.oneshot(chat_request(r#"{"message": ""}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(errors.load(Ordering::SeqCst), 0);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn successful_relay_returns_json_body() {
    let provider = Arc::new(MockCompletionProvider::new(MockBehavior::Reply(
        "1.  THE GIST OF THE ERROR: ...".to_string(),
    )));
    let app = build_router(state_with(provider));

    let response = app
        .oneshot(chat_request(r#"{"message": "ReferenceError: foo is not defined"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["response"], "1.  THE GIST OF THE ERROR: ...");
}

#[tokio::test]
async fn get_on_chat_is_not_allowed() {
    let provider = Arc::new(MockCompletionProvider::replying("unused"));
    let app = build_router(state_with(provider.clone()));

    let response = app
        .oneshot(Request::builder().uri("/chat").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(provider.call_count(), 0);
}
