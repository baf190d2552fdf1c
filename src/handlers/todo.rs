//! TODO handlers: create, read, update, delete. One function per verb on `/todos`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse, ReadTodoResponse,
    UpdateTodoRequest, UpdateTodoResponse,
};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_create(&req)?;
    let todo = state.todos.create(&req.subject, &req.description).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::OK, Json(CreateTodoResponse { todo })))
}

/// GET /todos?prev_id=&size=
pub async fn read(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let req = RequestValidator::read_request(&params)?;
    let todos = state.todos.read(req.prev_id, req.size).await?;
    Ok((StatusCode::OK, Json(ReadTodoResponse { todos })))
}

/// PUT /todos
pub async fn update(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_update(&req)?;
    let todo = state
        .todos
        .update(req.id, &req.subject, &req.description)
        .await?;
    tracing::info!(id = todo.id, "todo updated");
    Ok((StatusCode::OK, Json(UpdateTodoResponse { todo })))
}

/// DELETE /todos
pub async fn delete(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteTodoRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    state.todos.delete(&req.ids).await?;
    if !req.ids.is_empty() {
        tracing::info!(ids = ?req.ids, "todos deleted");
    }
    Ok((StatusCode::OK, Json(DeleteTodoResponse {})))
}
