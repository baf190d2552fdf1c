//! Router construction.

pub mod ops;
pub mod todo;
pub use ops::ops_routes;
pub use todo::todo_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: health/ready probes, `/todos`, request tracing and a body size cap.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(todo_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
