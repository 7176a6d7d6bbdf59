//! Handlers for the `/rooms` resource (tenant-scoped).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use utaroom_core::error::CoreError;
use utaroom_core::types::DbId;
use utaroom_core::validation::{validate_capacity, validate_name};
use utaroom_db::models::room::{CreateRoom, Room, UpdateRoom};
use utaroom_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::query::IdParam;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::tenancy::TenantContext;

#[derive(Debug, Deserialize)]
pub struct RoomListParams {
    pub id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/rooms — the resolved tenant's rooms; `?id=` selects one,
/// `?include_inactive=true` includes deactivated rooms in the listing.
pub async fn list(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> AppResult<Response> {
    if let Some(id) = params.id {
        let room = RoomRepo::find_for_tenant(&state.pool, ctx.tenant.id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
        return Ok(ApiResponse::ok(room).into_response());
    }

    let rooms =
        RoomRepo::list_for_tenant(&state.pool, ctx.tenant.id, params.include_inactive).await?;
    Ok(ApiResponse::ok(rooms).into_response())
}

/// POST /api/rooms — creates a room for the resolved tenant, subject to
/// the plan's room ceiling (checked atomically with the insert).
pub async fn create(
    ctx: TenantContext,
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<ApiResponse<Room>>)> {
    validate_name("name", &input.name)?;
    validate_capacity(input.capacity)?;

    let max_rooms = ctx.tenant.plan_type.limits().max_rooms;
    let room = RoomRepo::create_within_limit(&state.pool, ctx.tenant.id, max_rooms, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Room limit reached for the {} plan ({max_rooms} rooms)",
                ctx.tenant.plan_type.as_str()
            )))
        })?;

    Ok((StatusCode::CREATED, ApiResponse::ok(room)))
}

/// PUT /api/rooms?id=
pub async fn update(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<ApiResponse<Room>>> {
    let id = target.require()?;
    if let Some(name) = &input.name {
        validate_name("name", name)?;
    }
    if let Some(capacity) = input.capacity {
        validate_capacity(capacity)?;
    }

    let room = RoomRepo::update_for_tenant(&state.pool, ctx.tenant.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(ApiResponse::ok(room))
}

/// DELETE /api/rooms?id= — soft delete (`is_active = false`).
pub async fn delete(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = target.require()?;
    let deactivated = RoomRepo::deactivate(&state.pool, ctx.tenant.id, id).await?;
    if deactivated {
        Ok(ApiResponse::message_only("Room deactivated"))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Room", id }))
    }
}
