//! Business-hour entity model and DTOs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utaroom_core::types::{DbId, Timestamp};

/// A business-hour row: one per (tenant, day of week).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessHour {
    pub id: DbId,
    pub tenant_id: DbId,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i16,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub is_closed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a day's hours. POST upserts on
/// (tenant, day_of_week), so re-posting a day overwrites it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertBusinessHour {
    pub day_of_week: i16,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    /// Defaults to `false` if omitted.
    pub is_closed: Option<bool>,
}

/// DTO for partially updating an existing day row by id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBusinessHour {
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub is_closed: Option<bool>,
}
