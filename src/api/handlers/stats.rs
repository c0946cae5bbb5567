use axum::extract::State;
use axum::Json;

use crate::db::{self, trade_repo};
use crate::errors::AppError;
use crate::models::TradeStats;
use crate::AppState;

pub async fn summary(State(state): State<AppState>) -> Result<Json<TradeStats>, AppError> {
    crate::metrics::record_request("stats");

    let stats = db::with_connection(&state.config.database_path, |conn| {
        Box::pin(trade_repo::get_stats(conn))
    })
    .await?;

    Ok(Json(stats))
}
