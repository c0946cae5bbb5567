use axum::extract::State;
use axum::Json;

use crate::db::{self, alert_repo};
use crate::errors::AppError;
use crate::models::Alert;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Alert>>, AppError> {
    crate::metrics::record_request("alerts");

    let alerts = db::with_connection(&state.config.database_path, |conn| {
        Box::pin(alert_repo::list_recent(conn, alert_repo::RECENT_ALERTS))
    })
    .await?;

    Ok(Json(alerts))
}
