//! `/todos` resource: each verb is its own route; anything else gets 405 from the router.

use crate::handlers::todo::{create, delete as delete_handler, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(read).post(create).put(update).delete(delete_handler),
        )
        .with_state(state)
}
