use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn health_check() -> Json<Value> {
    debug!("Health check requested");
    Json(json!({ "status": "ok" }))
}
