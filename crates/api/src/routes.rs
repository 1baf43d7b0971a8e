use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/add-entry", any(handlers::add_entry))
        .route("/names", get(handlers::list_names))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
