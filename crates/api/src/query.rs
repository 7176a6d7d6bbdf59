//! Shared query parameter types for API handlers.
//!
//! Resource routes address PUT/DELETE targets with `?id=` rather than path
//! segments, so the same selector struct appears across handler modules.

use serde::Deserialize;
use utaroom_core::error::CoreError;
use utaroom_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Target selector for update/delete (`?id=`).
///
/// `id` stays optional at the type level so a missing parameter produces
/// the envelope's validation error instead of axum's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: Option<DbId>,
}

impl IdParam {
    pub fn require(&self) -> AppResult<DbId> {
        self.id.ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Missing required id query parameter".into(),
            ))
        })
    }
}
