use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::{
    dto::{AddEntryParams, NameDto},
    errors::{status_for, ApiError},
    state::AppState,
};

/// Adds a name or replaces the address of an existing one. Accepts any
/// method; only the query string is read.
#[instrument(skip(state), name = "api_add_entry")]
pub async fn add_entry(
    State(state): State<AppState>,
    Query(params): Query<AddEntryParams>,
) -> Result<String, (StatusCode, String)> {
    let (name, ip) = match (params.name, params.ip) {
        (Some(name), Some(ip)) if !name.is_empty() && !ip.is_empty() => (name, ip),
        _ => {
            warn!("add-entry called without name or ip");
            return Err((
                StatusCode::BAD_REQUEST,
                "Both 'name' and 'ip' query parameters are required".to_string(),
            ));
        }
    };

    match state.upsert_name.execute(&name, &ip).await {
        Ok(entry) => {
            info!(name = %entry.name, address = %entry.address, "Entry stored via API");
            Ok(format!("Added/Updated entry: {} -> {}", name, ip))
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(name = %name, error = %e, "Failed to store entry");
            }
            Err((status, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_list_names")]
pub async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<NameDto>>, ApiError> {
    let entries = state.list_names.execute().await.map_err(|e| {
        error!(error = %e, "Failed to read name table");
        ApiError(e)
    })?;

    Ok(Json(entries.into_iter().map(NameDto::from).collect()))
}
