//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utaroom_core::types::{DbId, Timestamp};

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub capacity: i32,
    pub category: Option<String>,
    /// Minor currency units per hour.
    pub price_per_hour: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room. The owning tenant comes from the request's
/// resolved tenant context, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: i32,
    pub category: Option<String>,
    pub price_per_hour: Option<i32>,
}

/// DTO for updating a room. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub category: Option<String>,
    pub price_per_hour: Option<i32>,
    pub is_active: Option<bool>,
}
