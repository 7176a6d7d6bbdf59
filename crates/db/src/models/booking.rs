//! Booking entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utaroom_core::types::{DbId, Timestamp};

/// A booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub tenant_id: DbId,
    pub room_id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a booking. The room must belong to the resolved tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub room_id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub notes: Option<String>,
}

/// DTO for updating a booking. All fields are optional; changing the room
/// or the window re-runs the overlap check.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub room_id: Option<DbId>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Optional filters for listing bookings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFilter {
    pub room_id: Option<DbId>,
    /// Inclusive lower bound on `start_time`.
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on `start_time`.
    pub to: Option<Timestamp>,
}
