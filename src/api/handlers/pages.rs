//! HTML page shell and the fragments the browser swaps into it.

use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Local;

use crate::db::{self, alert_repo, trade_repo};
use crate::errors::AppError;
use crate::ui::page::render_page;
use crate::ui::render::{render_alerts, render_stats, render_traders, render_trades};
use crate::ui::{Tab, TabState};
use crate::AppState;

/// Rows shown in the trades tab.
const TRADES_TAB_ROWS: i64 = 50;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_page(&TabState::default(), state.config.refresh_interval())
        .map_err(|_| AppError::Render("page".into()))?;
    Ok(Html(html))
}

pub async fn stats(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stats = db::with_connection(&state.config.database_path, |conn| {
        Box::pin(trade_repo::get_stats(conn))
    })
    .await?;

    let html = render_stats(&stats).map_err(|_| AppError::Render("stats".into()))?;
    Ok(Html(html))
}

/// Fragment for one tab panel. Dates render in the server's local zone.
pub async fn tab(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let tab: Tab = name.parse().map_err(AppError::NotFound)?;
    let path = state.config.database_path.as_path();

    let rendered = match tab {
        Tab::Trades => {
            let trades = db::with_connection(path, |conn| {
                Box::pin(trade_repo::list_trades(conn, TRADES_TAB_ROWS, 0))
            })
            .await?;
            render_trades(&trades, &Local)
        }
        Tab::Traders => {
            let traders = db::with_connection(path, |conn| {
                Box::pin(trade_repo::list_traders(conn, trade_repo::LEADERBOARD_SIZE))
            })
            .await?;
            render_traders(&traders, &Local)
        }
        Tab::Alerts => {
            let alerts = db::with_connection(path, |conn| {
                Box::pin(alert_repo::list_recent(conn, alert_repo::RECENT_ALERTS))
            })
            .await?;
            render_alerts(&alerts, &Local)
        }
    };

    rendered
        .map(Html)
        .map_err(|_| AppError::Render(format!("{tab} tab")))
}
