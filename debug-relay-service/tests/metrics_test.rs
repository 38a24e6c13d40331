//! Installs the global Prometheus recorder, so it lives in its own binary.

mod common;

use common::TestApp;
use debug_relay_service::services::init_metrics;
use debug_relay_service::services::providers::mock::MockBehavior;
use serde_json::json;

fn series<'a>(rendered: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("{name}{{");
    rendered
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .collect()
}

#[tokio::test]
async fn relay_outcomes_and_routes_are_exported() {
    init_metrics().expect("recorder installs once per process");

    let healthy = TestApp::spawn(MockBehavior::Reply("Null pointer on line 3".to_string())).await;
    let broken = TestApp::spawn(MockBehavior::Fail("connection reset".to_string())).await;

    let ok = healthy.post_chat(json!({"message": "NPE"})).await;
    assert_eq!(ok.status(), 200);
    let failed = broken
        .post_chat(json!({"message": "NPE", "model": "openai/gpt-4o"}))
        .await;
    assert_eq!(failed.status(), 500);

    let rendered = healthy
        .client
        .get(format!("{}/metrics", healthy.address))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let provider = series(&rendered, "relay_provider_requests_total");
    assert!(
        provider
            .iter()
            .any(|l| l.contains(r#"model="default""#) && l.contains(r#"outcome="ok""#)),
        "{rendered}"
    );
    assert!(
        provider
            .iter()
            .any(|l| l.contains(r#"model="custom""#) && l.contains(r#"outcome="network""#)),
        "{rendered}"
    );
    assert!(!rendered.contains("gpt-4o"));

    let http = series(&rendered, "http_requests_total");
    assert!(
        http.iter()
            .any(|l| l.contains(r#"path="/chat""#) && l.contains(r#"status="200""#)),
        "{rendered}"
    );
    assert!(
        http.iter()
            .any(|l| l.contains(r#"path="/chat""#) && l.contains(r#"status="500""#)),
        "{rendered}"
    );
}
