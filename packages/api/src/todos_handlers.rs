// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: Handles CRUD operations against the Supabase-backed todo collection

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::response::{bad_request, not_found, store_error_response};
use crate::AppState;
use todo_store::TodoPatch;

/// Request body for creating a todo
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub task: Option<String>,
}

/// Request body for updating a todo
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

/// List all todos, newest first
pub async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    info!("Listing todos");

    match state.store.list().await {
        Ok(todos) => {
            info!("Retrieved {} todos", todos.len());
            (StatusCode::OK, ResponseJson(todos)).into_response()
        }
        Err(e) => {
            error!("Failed to list todos: {}", e);
            store_error_response("DB read failed", &e, state.verbose_errors)
        }
    }
}

/// Create a new todo from the trimmed task text
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> impl IntoResponse {
    let task = request.task.as_deref().map(str::trim).unwrap_or("");
    if task.is_empty() {
        return bad_request("Task is required and cannot be empty");
    }

    info!("Creating todo: {}", task);

    match state.store.insert(task).await {
        Ok(todo) => {
            info!("Created todo (ID: {})", todo.id);
            (
                StatusCode::CREATED,
                ResponseJson(json!({
                    "message": "Task added successfully",
                    "data": todo
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create todo: {}", e);
            store_error_response("DB insert failed", &e, state.verbose_errors)
        }
    }
}

/// Update the supplied fields of an existing todo
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTodoRequest>,
) -> impl IntoResponse {
    // A supplied task must still be non-empty after trimming; the stored
    // text is never whitespace-only.
    let task = match request.task {
        Some(task) => {
            let task = task.trim().to_string();
            if task.is_empty() {
                return bad_request("Task is required and cannot be empty");
            }
            Some(task)
        }
        None => None,
    };

    let patch = TodoPatch {
        task,
        completed: request.completed,
    };
    if patch.is_empty() {
        return bad_request("No fields to update");
    }

    info!("Updating todo: {}", id);

    match state.store.update(id, &patch).await {
        Ok(Some(todo)) => {
            info!("Updated todo (ID: {})", todo.id);
            (
                StatusCode::OK,
                ResponseJson(json!({
                    "message": "Task updated successfully",
                    "data": todo
                })),
            )
                .into_response()
        }
        Ok(None) => {
            info!("Todo not found for update: {}", id);
            not_found("Todo not found")
        }
        Err(e) => {
            error!("Failed to update todo {}: {}", id, e);
            store_error_response("DB update failed", &e, state.verbose_errors)
        }
    }
}

/// Delete a todo by id
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Deleting todo: {}", id);

    match state.store.delete(id).await {
        Ok(Some(todo)) => {
            info!("Deleted todo (ID: {})", todo.id);
            (
                StatusCode::OK,
                ResponseJson(json!({
                    "message": "Task deleted successfully",
                    "data": todo
                })),
            )
                .into_response()
        }
        Ok(None) => {
            info!("Todo not found for deletion: {}", id);
            not_found("Todo not found")
        }
        Err(e) => {
            error!("Failed to delete todo {}: {}", id, e);
            store_error_response("DB delete failed", &e, state.verbose_errors)
        }
    }
}
