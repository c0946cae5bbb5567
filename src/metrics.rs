use std::sync::OnceLock;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder once per process and register the
/// dashboard metrics. Later calls return the same handle.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("A global metrics recorder was already installed");
            }

            // Pre-register so they appear before the first request.
            counter!("api_requests_total", "endpoint" => "trades").absolute(0);
            counter!("api_requests_total", "endpoint" => "stats").absolute(0);
            counter!("api_requests_total", "endpoint" => "alerts").absolute(0);
            counter!("api_requests_total", "endpoint" => "traders").absolute(0);
            counter!("api_errors_total").absolute(0);
            gauge!("ws_clients_connected").set(0.0);

            handle
        })
        .clone()
}

pub fn record_request(endpoint: &'static str) {
    counter!("api_requests_total", "endpoint" => endpoint).increment(1);
}
