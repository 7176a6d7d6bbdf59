//! Handlers for the `/bookings` resource (tenant-scoped).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use utaroom_core::error::CoreError;
use utaroom_core::types::{DbId, Timestamp};
use utaroom_core::validation::{validate_booking_window, validate_customer_email, validate_name};
use utaroom_db::models::booking::{Booking, BookingFilter, CreateBooking, UpdateBooking};
use utaroom_db::repositories::{BookingRepo, BookingWrite};

use crate::error::{AppError, AppResult};
use crate::query::IdParam;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::tenancy::TenantContext;

#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub id: Option<DbId>,
    pub room_id: Option<DbId>,
    /// Inclusive lower bound on `start_time` (RFC 3339).
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on `start_time` (RFC 3339).
    pub to: Option<Timestamp>,
}

/// GET /api/bookings — the resolved tenant's bookings ordered by start
/// time; `?id=` selects one, `?room_id=`/`?from=`/`?to=` filter the list.
pub async fn list(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<Response> {
    if let Some(id) = params.id {
        let booking = BookingRepo::find_for_tenant(&state.pool, ctx.tenant.id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Booking",
                id,
            }))?;
        return Ok(ApiResponse::ok(booking).into_response());
    }

    let filter = BookingFilter {
        room_id: params.room_id,
        from: params.from,
        to: params.to,
    };
    let bookings = BookingRepo::list_for_tenant(&state.pool, ctx.tenant.id, &filter).await?;
    Ok(ApiResponse::ok(bookings).into_response())
}

/// POST /api/bookings — books a room for the resolved tenant. The overlap
/// check and the insert run in one transaction.
pub async fn create(
    ctx: TenantContext,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    validate_name("customer_name", &input.customer_name)?;
    validate_customer_email(&input.customer_email)?;
    validate_booking_window(input.start_time, input.end_time)?;

    match BookingRepo::create_if_free(&state.pool, ctx.tenant.id, &input).await? {
        BookingWrite::Written(booking) => Ok((StatusCode::CREATED, ApiResponse::ok(booking))),
        BookingWrite::RoomUnavailable => Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: input.room_id,
        })),
        BookingWrite::Overlap => Err(AppError::Core(CoreError::Conflict(
            "Room is already booked for the requested time slot".into(),
        ))),
    }
}

/// PUT /api/bookings?id= — partial update; changing the room or the
/// window re-runs the overlap check.
pub async fn update(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let id = target.require()?;
    if let Some(name) = &input.customer_name {
        validate_name("customer_name", name)?;
    }
    if let Some(email) = &input.customer_email {
        validate_customer_email(email)?;
    }

    let existing = BookingRepo::find_for_tenant(&state.pool, ctx.tenant.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    let start = input.start_time.unwrap_or(existing.start_time);
    let end = input.end_time.unwrap_or(existing.end_time);
    validate_booking_window(start, end)?;

    match BookingRepo::update_if_free(&state.pool, ctx.tenant.id, id, &input).await? {
        Some(BookingWrite::Written(booking)) => Ok(ApiResponse::ok(booking)),
        Some(BookingWrite::RoomUnavailable) => Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: input.room_id.unwrap_or(existing.room_id),
        })),
        Some(BookingWrite::Overlap) => Err(AppError::Core(CoreError::Conflict(
            "Room is already booked for the requested time slot".into(),
        ))),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        })),
    }
}

/// DELETE /api/bookings?id= — cancellation is a hard delete.
pub async fn delete(
    ctx: TenantContext,
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = target.require()?;
    let deleted = BookingRepo::delete_for_tenant(&state.pool, ctx.tenant.id, id).await?;
    if deleted {
        Ok(ApiResponse::message_only("Booking cancelled"))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
    }
}
