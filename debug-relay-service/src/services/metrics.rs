//! Prometheus metrics for debug-relay-service.

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Call once at startup.
pub fn init_metrics() -> Result<(), BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Which model a call went to, as a metric label. Clients may name any
/// model, so only the configured default gets its own value.
pub fn model_class(model: &str, default_model: &str) -> &'static str {
    if model == default_model {
        "default"
    } else {
        "custom"
    }
}

/// Record the outcome of one provider call (`ok`, `empty`, or an error kind).
pub fn record_provider_call(model: &str, default_model: &str, outcome: &'static str) {
    counter!(
        "relay_provider_requests_total",
        "model" => model_class(model, default_model),
        "outcome" => outcome
    )
    .increment(1);
}
