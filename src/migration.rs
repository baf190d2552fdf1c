//! Schema for the `todos` table. Idempotent: safe to run on every start.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Millisecond-precision UTC timestamp, as stored in `created_at` / `updated_at`.
const NOW_MS: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// Create `todos` and the trigger that keeps `updated_at` current.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let table_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            subject TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL DEFAULT ({now}),
            updated_at TEXT NOT NULL DEFAULT ({now}),
            CHECK (subject <> '')
        )
        "#,
        now = NOW_MS
    );
    sqlx::query(&table_ddl).execute(pool).await?;

    // Trigger writes are not counted in the UPDATE's affected rows. Within the same
    // millisecond the stamp is bumped by 1ms so `updated_at` always moves forward.
    let trigger_ddl = format!(
        r#"
        CREATE TRIGGER IF NOT EXISTS trigger_todos_updated_at
        AFTER UPDATE OF subject, description ON todos
        BEGIN
            UPDATE todos SET updated_at = CASE
                WHEN {now} > OLD.updated_at THEN {now}
                ELSE strftime('%Y-%m-%d %H:%M:%f', OLD.updated_at, '+0.001 seconds')
            END
            WHERE id = NEW.id;
        END
        "#,
        now = NOW_MS
    );
    sqlx::query(&trigger_ddl).execute(pool).await?;

    tracing::info!("todos schema is up to date");
    Ok(())
}
