//! Read-only usage aggregation for the resolved tenant.

use axum::extract::State;
use axum::Json;
use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use utaroom_core::error::CoreError;
use utaroom_core::types::Timestamp;
use utaroom_db::models::tenant::PlanType;
use utaroom_db::repositories::{BookingRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::tenancy::TenantContext;

/// One resource's consumption against its plan ceiling.
#[derive(Debug, Serialize)]
pub struct UsageMeter {
    pub used: i64,
    pub limit: i64,
    pub remaining: i64,
}

impl UsageMeter {
    fn new(used: i64, limit: i64) -> Self {
        Self {
            used,
            limit,
            remaining: (limit - used).max(0),
        }
    }
}

/// Usage report returned by GET /api/usage.
#[derive(Debug, Serialize)]
pub struct UsageSummary {
    pub plan_type: PlanType,
    pub rooms: UsageMeter,
    pub bookings_this_month: UsageMeter,
}

/// GET /api/usage — active room count and current-calendar-month booking
/// count against the tenant's plan limits. Aggregation only, no writes.
pub async fn summary(
    ctx: TenantContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UsageSummary>>> {
    let limits = ctx.tenant.plan_type.limits();

    let rooms_used = RoomRepo::count_active(&state.pool, ctx.tenant.id).await?;

    let (month_start, month_end) = current_month_window()?;
    let bookings_used =
        BookingRepo::count_between(&state.pool, ctx.tenant.id, month_start, month_end).await?;

    Ok(ApiResponse::ok(UsageSummary {
        plan_type: ctx.tenant.plan_type,
        rooms: UsageMeter::new(rooms_used, limits.max_rooms),
        bookings_this_month: UsageMeter::new(bookings_used, limits.max_bookings_per_month),
    }))
}

/// `[first instant of this month, first instant of next month)` in UTC.
fn current_month_window() -> AppResult<(Timestamp, Timestamp)> {
    let now = Utc::now();
    let (year, month) = (now.year(), now.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let month_first = |y: i32, m: u32| -> AppResult<Timestamp> {
        NaiveDate::from_ymd_opt(y, m, 1)
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .ok_or_else(|| {
                AppError::Core(CoreError::Internal(format!(
                    "invalid month boundary {y}-{m:02}"
                )))
            })
    };

    Ok((month_first(year, month)?, month_first(next_year, next_month)?))
}
