use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{RowId, Timestamp};

/// Alert type tag for large trades placed by freshly seen wallets.
pub const NEW_ACCOUNT_LARGE_TRADE: &str = "NEW_ACCOUNT_LARGE_TRADE";

/// An alert row joined with the trade that raised it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Alert {
    pub id: RowId,
    pub trade_id: RowId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<Timestamp>,

    // Joined from trades
    pub market_question: Option<String>,
    pub size: Option<f64>,
    pub trader_address: Option<String>,
    pub timestamp: Option<Timestamp>,
}

impl Alert {
    pub fn is_new_account(&self) -> bool {
        self.kind.as_deref() == Some(NEW_ACCOUNT_LARGE_TRADE)
    }
}
