use serde::Serialize;

use crate::models::{Alert, Trade, TradeCount};

/// Messages pushed to connected dashboard sockets.
///
/// Only `Stats` is sent today, once per connection. The other variants are
/// for producers that feed `AppState::broadcast`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    #[serde(rename = "stats")]
    Stats(TradeCount),

    #[serde(rename = "trade")]
    Trade(Trade),

    #[serde(rename = "alert")]
    Alert(Alert),
}
