//! Persistence for TODO entities against SQLite.

use crate::error::AppError;
use crate::model::Todo;
use sqlx::SqlitePool;

const SELECT_BY_ID: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?";

/// Owns every SQL statement for the `todos` table. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct TodoService {
    pool: SqlitePool,
}

impl TodoService {
    pub fn new(pool: SqlitePool) -> Self {
        TodoService { pool }
    }

    #[cfg(test)]
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a row, then read it back so timestamps come from the store.
    pub async fn create(&self, subject: &str, description: &str) -> Result<Todo, AppError> {
        const INSERT: &str = "INSERT INTO todos(subject, description) VALUES(?, ?)";

        tracing::debug!(sql = %INSERT, "query");
        let res = sqlx::query(INSERT)
            .bind(subject)
            .bind(description)
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();

        self.confirm(id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Newest-first page of rows with `id < prev_id` (no bound when `prev_id == 0`),
    /// at most `size` long (unbounded when `size == 0`).
    pub async fn read(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>, AppError> {
        const READ: &str = "SELECT id, subject, description, created_at, updated_at FROM todos ORDER BY id DESC LIMIT ?";
        const READ_WITH_ID: &str = "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id < ? ORDER BY id DESC LIMIT ?";

        // SQLite treats a negative LIMIT as no limit.
        let limit = if size == 0 { -1 } else { size };
        let query = if prev_id == 0 {
            tracing::debug!(sql = %READ, limit, "query");
            sqlx::query_as::<_, Todo>(READ).bind(limit)
        } else {
            tracing::debug!(sql = %READ_WITH_ID, prev_id, limit, "query");
            sqlx::query_as::<_, Todo>(READ_WITH_ID).bind(prev_id).bind(limit)
        };
        let todos = query.fetch_all(&self.pool).await?;
        Ok(todos)
    }

    /// Update subject and description; `NotFound` when no row has `id`.
    pub async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo, AppError> {
        const UPDATE: &str = "UPDATE todos SET subject = ?, description = ? WHERE id = ?";

        tracing::debug!(sql = %UPDATE, id, "query");
        let res = sqlx::query(UPDATE)
            .bind(subject)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("todo {}", id)));
        }

        self.confirm(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))
    }

    /// Delete every row in `ids` with one statement. Succeeds if at least one row went away.
    pub async fn delete(&self, ids: &[i64]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM todos WHERE id IN ({})", placeholders);
        tracing::debug!(sql = %sql, ids = ?ids, "query");
        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let res = query.execute(&self.pool).await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("todos {:?}", ids)));
        }
        Ok(())
    }

    async fn confirm(&self, id: i64) -> Result<Option<Todo>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let todo = sqlx::query_as::<_, Todo>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }
}
