//! JSON body extractor that reports every decode failure as 400 Bad Request.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but does not require a `Content-Type` header and rejects with
/// `AppError::BadRequest` instead of 415/422. Body-limit overruns stay 413.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
                _ => AppError::BadRequest(e.body_text()),
            })?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
        Ok(JsonBody(value))
    }
}
