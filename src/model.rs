//! TODO entity and the request/response bodies of the `/todos` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted TODO row. Timestamps are owned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

/// Cursor page request. Zero means "unset" for both fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadTodoRequest {
    pub prev_id: i64,
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteTodoRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeleteTodoResponse {}
