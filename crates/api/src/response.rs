//! Shared response envelope types for API handlers.
//!
//! Every API response carries a `success` flag. Successful payloads sit
//! under `data`; write endpoints also return a human-readable `message`.
//! Error bodies are produced by [`AppError`](crate::error::AppError).

use serde::Serialize;

/// `{ "success": true, "message"?: ..., "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }
}

/// `{ "success": true, "message": ... }` envelope for responses without data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
