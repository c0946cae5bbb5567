use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let api = Router::new()
        .route("/api/trades", get(handlers::trades::list))
        .route("/api/stats", get(handlers::stats::summary))
        .route("/api/alerts", get(handlers::alerts::list))
        .route("/api/traders", get(handlers::traders::list));

    let pages = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/partials/stats", get(handlers::pages::stats))
        .route("/partials/:tab", get(handlers::pages::tab));

    let ops = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/ws", get(handlers::ws::handler));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api.merge(pages)
        .merge(ops)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
