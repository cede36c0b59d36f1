use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

use crate::AppState;

/// Connectivity health check for operators and load balancers. Runs a
/// lightweight count against the collection; always reports the store's
/// diagnostics on failure.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.count().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "supabase": "connected",
                "supabase_url": state.store.project_url(),
                "timestamp": Utc::now().to_rfc3339(),
            })),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "error": e.to_string(),
                    "code": e.code(),
                    "details": e.details(),
                    "hint": e.hint(),
                    "supabase_url": state.store.project_url(),
                })),
            )
        }
    }
}
