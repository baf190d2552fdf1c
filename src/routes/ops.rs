//! Liveness and readiness probes for the server process.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    todos_table: Option<&'static str>,
}

async fn live() -> Json<ProbeBody> {
    Json(ProbeBody {
        status: "ok",
        todos_table: None,
    })
}

/// Ready once the pool answers and the `todos` schema has been applied.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeBody>) {
    match sqlx::query("SELECT 1 FROM todos LIMIT 1")
        .fetch_optional(&state.pool)
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(ProbeBody {
                status: "ok",
                todos_table: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "todos table not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeBody {
                    status: "unavailable",
                    todos_table: Some("unreachable"),
                }),
            )
        }
    }
}

/// GET /health (process up) and GET /ready (store usable).
pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .with_state(state)
}
