//! Field-level validation rules for bookings and business hours.
//!
//! Handlers call these before touching the database so malformed input is
//! rejected with a [`CoreError::Validation`] and never reaches a query.

use chrono::NaiveTime;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Timestamp;

/// A booking window must be strictly forward in time.
pub fn validate_booking_window(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if start < end {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "start_time must be before end_time".to_string(),
        ))
    }
}

/// Half-open interval overlap: `[a_start, a_end)` intersects `[b_start, b_end)`.
///
/// Back-to-back windows (one ends exactly when the other starts) do not
/// overlap.
pub fn windows_overlap(
    a_start: Timestamp,
    a_end: Timestamp,
    b_start: Timestamp,
    b_end: Timestamp,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Days of the week are numbered 0 (Sunday) through 6 (Saturday).
pub fn validate_day_of_week(day_of_week: i16) -> Result<(), CoreError> {
    if (0..=6).contains(&day_of_week) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "day_of_week must be between 0 and 6, got {day_of_week}"
        )))
    }
}

/// An open day needs both times with `close_time` after `open_time`;
/// a closed day carries no constraint on either.
pub fn validate_open_close(
    is_closed: bool,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
) -> Result<(), CoreError> {
    if is_closed {
        return Ok(());
    }
    match (open_time, close_time) {
        (Some(open), Some(close)) if open < close => Ok(()),
        (Some(_), Some(_)) => Err(CoreError::Validation(
            "close_time must be after open_time".to_string(),
        )),
        _ => Err(CoreError::Validation(
            "open_time and close_time are required unless is_closed is true".to_string(),
        )),
    }
}

/// Customer email must be well-formed before a booking is accepted.
pub fn validate_customer_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "customer_email is not a valid email address: {email}"
        )))
    }
}

/// Room capacity is a positive headcount.
pub fn validate_capacity(capacity: i32) -> Result<(), CoreError> {
    if capacity > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "capacity must be greater than zero, got {capacity}"
        )))
    }
}

/// Names (tenant, room, customer) must be non-blank.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}
