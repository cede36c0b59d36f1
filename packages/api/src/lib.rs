// ABOUTME: HTTP API layer for the todo service providing REST endpoints and routing
// ABOUTME: Maps store results and errors onto the JSON wire contract

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use todo_store::TodoStore;

pub mod health;
pub mod response;
pub mod todos_handlers;

/// State handed to every handler. Built once at startup and cloned per
/// request; there is no module-level client.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    /// Echo store diagnostics (`details`/`code`/`hint`) in 500 bodies.
    pub verbose_errors: bool,
}

/// Creates the todo API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/todo", get(todos_handlers::list_todos))
        .route("/api/todo", post(todos_handlers::create_todo))
        .route("/api/todo/{id}", put(todos_handlers::update_todo))
        .route("/api/todo/{id}", delete(todos_handlers::delete_todo))
        .with_state(state)
}
