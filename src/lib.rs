pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod ui;

use tokio::sync::broadcast;

use crate::api::ws_types::WsMessage;
use crate::config::AppConfig;

/// Capacity of the per-process socket broadcast channel.
const WS_CHANNEL_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub ws_tx: broadcast::Sender<WsMessage>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (ws_tx, _) = broadcast::channel::<WsMessage>(WS_CHANNEL_CAPACITY);
        Self {
            config,
            ws_tx,
            metrics_handle: crate::metrics::init_metrics(),
        }
    }

    /// Push a message to every connected dashboard socket.
    /// Returns how many clients it was queued for.
    pub fn broadcast(&self, msg: WsMessage) -> usize {
        self.ws_tx.send(msg).unwrap_or(0)
    }

    /// Sockets currently subscribed to broadcasts.
    pub fn connected_clients(&self) -> usize {
        self.ws_tx.receiver_count()
    }
}
