//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "success": true, "data": ..., "message"?: ... }`;
//! failures are produced by [`crate::error::AppError`] with `success: false`.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` maps to get
//! compile-time type safety and consistent serialization.

use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `{ "success": true, "data": ... }`
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
    }
}

impl ApiResponse<()> {
    /// `{ "success": true, "message": ... }` — used by deletes, which have
    /// no row to return.
    pub fn message_only(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: Some(message.into()),
        })
    }
}
