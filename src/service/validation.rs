//! Request shape checks performed before the store is touched.

use crate::error::AppError;
use crate::model::{CreateTodoRequest, ReadTodoRequest, UpdateTodoRequest};
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    pub fn validate_create(req: &CreateTodoRequest) -> Result<(), AppError> {
        require_subject(&req.subject)
    }

    pub fn validate_update(req: &UpdateTodoRequest) -> Result<(), AppError> {
        if req.id == 0 {
            return Err(AppError::BadRequest("id is required".into()));
        }
        require_subject(&req.subject)
    }

    /// Parse `prev_id` and `size` from the query string. Missing or empty values mean 0.
    pub fn read_request(params: &HashMap<String, String>) -> Result<ReadTodoRequest, AppError> {
        Ok(ReadTodoRequest {
            prev_id: parse_count(params, "prev_id")?,
            size: parse_count(params, "size")?,
        })
    }
}

fn require_subject(subject: &str) -> Result<(), AppError> {
    if subject.is_empty() {
        return Err(AppError::BadRequest("subject is required".into()));
    }
    Ok(())
}

fn parse_count(params: &HashMap<String, String>, key: &str) -> Result<i64, AppError> {
    let raw = match params.get(key).map(String::as_str) {
        None | Some("") => return Ok(0),
        Some(s) => s,
    };
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer, got '{}'", key, raw)))
}
