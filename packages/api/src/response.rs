// ABOUTME: Shared API response helpers
// ABOUTME: Provides consistent error bodies across all endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde_json::{json, Map, Value};

use todo_store::StoreError;

/// 500 body for a failed store operation. The store's diagnostics are
/// echoed only when verbose errors are enabled; the static context string
/// is always present.
pub fn store_error_response(context: &str, err: &StoreError, verbose: bool) -> Response {
    let mut body = Map::new();
    body.insert("error".to_string(), json!(context));
    if verbose {
        body.insert("details".to_string(), json!(err.to_string()));
        if let Some(code) = err.code() {
            body.insert("code".to_string(), json!(code));
        }
        if let Some(hint) = err.hint() {
            body.insert("hint".to_string(), json!(hint));
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseJson(Value::Object(body)),
    )
        .into_response()
}

pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        ResponseJson(json!({ "error": message })),
    )
        .into_response()
}

pub fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        ResponseJson(json!({ "error": message })),
    )
        .into_response()
}
