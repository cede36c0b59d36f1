use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo row as the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a todo. Unset fields never appear in the PATCH
/// body, so the store leaves those columns untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.completed.is_none()
    }
}
