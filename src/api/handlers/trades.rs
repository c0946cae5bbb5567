use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::params::int_or_default;
use crate::db::{self, trade_repo};
use crate::errors::AppError;
use crate::models::Trade;
use crate::AppState;

/// Raw `limit`/`offset` strings; coercion happens in [`TradesQuery::page`].
#[derive(Debug, Default, Deserialize)]
pub struct TradesQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl TradesQuery {
    /// `(limit, offset)` with unparsable values replaced by the defaults.
    pub fn page(&self) -> (i64, i64) {
        (
            int_or_default(self.limit.as_deref(), trade_repo::DEFAULT_PAGE_SIZE),
            int_or_default(self.offset.as_deref(), 0),
        )
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TradesQuery>,
) -> Result<Json<Vec<Trade>>, AppError> {
    crate::metrics::record_request("trades");
    let (limit, offset) = query.page();

    let trades = db::with_connection(&state.config.database_path, |conn| {
        Box::pin(trade_repo::list_trades(conn, limit, offset))
    })
    .await?;

    Ok(Json(trades))
}
