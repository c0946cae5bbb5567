use axum::extract::State;
use axum::Json;

use crate::db::{self, trade_repo};
use crate::errors::AppError;
use crate::models::TraderAggregate;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TraderAggregate>>, AppError> {
    crate::metrics::record_request("traders");

    let traders = db::with_connection(&state.config.database_path, |conn| {
        Box::pin(trade_repo::list_traders(conn, trade_repo::LEADERBOARD_SIZE))
    })
    .await?;

    Ok(Json(traders))
}
