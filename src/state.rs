//! Shared application state for all routes.

use crate::service::TodoService;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub todos: TodoService,
}

impl AppState {
    /// The pool is created once at startup; the service shares it.
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            todos: TodoService::new(pool.clone()),
            pool,
        }
    }
}
