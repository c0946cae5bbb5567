use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{RowId, Timestamp};

/// Database row for the trades table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Trade {
    pub id: RowId,
    pub timestamp: Option<Timestamp>,
    pub market_question: Option<String>,
    pub outcome: Option<String>,
    pub size: Option<f64>,
    pub price: Option<f64>,
    pub trader_address: Option<String>,
    pub is_new_account: bool,
    pub is_sports: bool,
}

/// Aggregate figures over all non-sports trades.
///
/// Sum/avg/max are `None` when no trade matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct TradeStats {
    pub total_trades: i64,
    pub unique_traders: i64,
    pub total_volume: Option<f64>,
    pub avg_size: Option<f64>,
    pub max_size: Option<f64>,
    pub new_account_trades: Option<i64>,
}

/// Per-address leaderboard row, computed at query time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct TraderAggregate {
    pub trader_address: Option<String>,
    pub trade_count: i64,
    pub total_volume: Option<f64>,
    pub avg_size: Option<f64>,
    pub max_size: Option<f64>,
    pub first_trade: Option<Timestamp>,
    pub last_trade: Option<Timestamp>,
}

/// Snapshot sent to socket clients on connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TradeCount {
    pub count: i64,
}
