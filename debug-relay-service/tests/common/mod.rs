#![allow(dead_code)]

use debug_relay_service::config::{OpenRouterSettings, RelayConfig, DEFAULT_MODEL};
use debug_relay_service::services::providers::mock::{MockBehavior, MockCompletionProvider};
use debug_relay_service::services::CompletionProvider;
use debug_relay_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub fn test_config(base_url: &str) -> RelayConfig {
    RelayConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        openrouter: OpenRouterSettings {
            api_key: Secret::new("sk-or-test".to_string()),
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
        },
        default_model: DEFAULT_MODEL.to_string(),
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockCompletionProvider>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(behavior: MockBehavior) -> Self {
        let provider = Arc::new(MockCompletionProvider::new(behavior));
        let port = spawn_with_provider(provider.clone()).await;

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            provider,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_chat(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/chat", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Start the server with `provider` on a random port and wait until it answers.
pub async fn spawn_with_provider(provider: Arc<dyn CompletionProvider>) -> u16 {
    let app = Application::build_with_provider(test_config("http://127.0.0.1:1"), provider)
        .await
        .expect("Failed to build test application");

    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let client = reqwest::Client::new();
    let health_url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    port
}
