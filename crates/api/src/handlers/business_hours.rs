//! Handlers for the `/business-hours` resource (tenant-scoped).
//!
//! At most one row per (tenant, day of week): POST is an upsert, so seeding
//! a week and correcting a single day go through the same endpoint.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use utaroom_core::error::CoreError;
use utaroom_core::validation::{validate_day_of_week, validate_open_close};
use utaroom_db::models::business_hour::{BusinessHour, UpdateBusinessHour, UpsertBusinessHour};
use utaroom_db::repositories::BusinessHourRepo;

use crate::error::{AppError, AppResult};
use crate::query::IdParam;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::tenancy::TenantContext;

/// GET /api/business-hours — the resolved tenant's week, ordered by day.
pub async fn list(
    ctx: TenantContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<BusinessHour>>>> {
    let hours = BusinessHourRepo::list_for_tenant(&state.pool, ctx.tenant.id).await?;
    Ok(ApiResponse::ok(hours))
}

/// POST /api/business-hours — create or replace one day's hours.
pub async fn upsert(
    ctx: TenantContext,
    State(state): State<AppState>,
    Json(input): Json<UpsertBusinessHour>,
) -> AppResult<(StatusCode, Json<ApiResponse<BusinessHour>>)> {
    validate_day_of_week(input.day_of_week)?;
    let is_closed = input.is_closed.unwrap_or(false);
    validate_open_close(is_closed, input.open_time, input.close_time)?;

    let hour = BusinessHourRepo::upsert(&state.pool, ctx.tenant.id, &input).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(hour)))
}

/// PUT /api/business-hours?id= — partial update of one day row.
pub async fn update(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
    Json(input): Json<UpdateBusinessHour>,
) -> AppResult<Json<ApiResponse<BusinessHour>>> {
    let id = target.require()?;

    let existing = BusinessHourRepo::find_for_tenant(&state.pool, ctx.tenant.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BusinessHour",
            id,
        }))?;

    // Validate the merged row, since the repository applies COALESCE
    // semantics: unspecified fields keep their current values.
    let is_closed = input.is_closed.unwrap_or(existing.is_closed);
    let open_time = input.open_time.or(existing.open_time);
    let close_time = input.close_time.or(existing.close_time);
    validate_open_close(is_closed, open_time, close_time)?;

    let hour = BusinessHourRepo::update_for_tenant(&state.pool, ctx.tenant.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BusinessHour",
            id,
        }))?;
    Ok(ApiResponse::ok(hour))
}

/// DELETE /api/business-hours?id= — removes the day row entirely.
pub async fn delete(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = target.require()?;
    let deleted = BusinessHourRepo::delete_for_tenant(&state.pool, ctx.tenant.id, id).await?;
    if deleted {
        Ok(ApiResponse::message_only("Business hours deleted"))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BusinessHour",
            id,
        }))
    }
}
