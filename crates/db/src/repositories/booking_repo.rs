//! Repository for the `bookings` table.
//!
//! Writes that depend on a check (room ownership, slot overlap) run inside
//! a transaction with the room row locked, so two concurrent requests for
//! the same slot cannot both pass the check.

use sqlx::{PgPool, Postgres, Transaction};
use utaroom_core::types::{DbId, Timestamp};

use crate::models::booking::{Booking, BookingFilter, CreateBooking, UpdateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, room_id, customer_name, customer_email, \
                       start_time, end_time, notes, created_at, updated_at";

/// Outcome of a guarded booking write.
#[derive(Debug)]
pub enum BookingWrite {
    Written(Booking),
    /// The target room does not exist within the tenant or is deactivated.
    RoomUnavailable,
    /// Another booking already occupies part of `[start_time, end_time)`.
    Overlap,
}

/// Provides CRUD operations for bookings, scoped to one tenant.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking if the room belongs to the tenant, is active, and
    /// the window is free.
    pub async fn create_if_free(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateBooking,
    ) -> Result<BookingWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_room(&mut tx, tenant_id, input.room_id).await? {
            tx.rollback().await?;
            return Ok(BookingWrite::RoomUnavailable);
        }

        if slot_taken(&mut tx, input.room_id, input.start_time, input.end_time, None).await? {
            tx.rollback().await?;
            return Ok(BookingWrite::Overlap);
        }

        let query = format!(
            "INSERT INTO bookings
                 (tenant_id, room_id, customer_name, customer_email, start_time, end_time, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(tenant_id)
            .bind(input.room_id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(BookingWrite::Written(booking))
    }

    /// Find a booking by ID within a tenant.
    pub async fn find_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tenant's bookings ordered by start time, with optional room
    /// and date-range filters.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE tenant_id = $1
               AND ($2::bigint IS NULL OR room_id = $2)
               AND ($3::timestamptz IS NULL OR start_time >= $3)
               AND ($4::timestamptz IS NULL OR start_time < $4)
             ORDER BY start_time"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(tenant_id)
            .bind(filter.room_id)
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(pool)
            .await
    }

    /// Count a tenant's bookings with `start_time` in `[from, to)`.
    /// Used by the usage endpoint for the current calendar month.
    pub async fn count_between(
        pool: &PgPool,
        tenant_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings
             WHERE tenant_id = $1 AND start_time >= $2 AND start_time < $3",
        )
        .bind(tenant_id)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Apply a partial update if the (possibly changed) room and window are
    /// still free. The caller validates the merged window before calling.
    ///
    /// Returns `None` if the booking does not exist within the tenant.
    pub async fn update_if_free(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<BookingWrite>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE id = $1 AND tenant_id = $2 FOR UPDATE"
        );
        let Some(existing) = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let room_id = input.room_id.unwrap_or(existing.room_id);
        let start = input.start_time.unwrap_or(existing.start_time);
        let end = input.end_time.unwrap_or(existing.end_time);

        if !lock_room(&mut tx, tenant_id, room_id).await? {
            tx.rollback().await?;
            return Ok(Some(BookingWrite::RoomUnavailable));
        }

        if slot_taken(&mut tx, room_id, start, end, Some(id)).await? {
            tx.rollback().await?;
            return Ok(Some(BookingWrite::Overlap));
        }

        let query = format!(
            "UPDATE bookings SET
                room_id = $3,
                customer_name = COALESCE($4, customer_name),
                customer_email = COALESCE($5, customer_email),
                start_time = $6,
                end_time = $7,
                notes = COALESCE($8, notes),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(room_id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(start)
            .bind(end)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(BookingWrite::Written(booking)))
    }

    /// Cancel a booking (hard delete). Returns `true` if a row was removed.
    pub async fn delete_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Lock the room row for the rest of the transaction. Returns `false` when
/// the room is missing, inactive, or owned by another tenant.
async fn lock_room(
    tx: &mut Transaction<'_, Postgres>,
    tenant_id: DbId,
    room_id: DbId,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id FROM rooms WHERE id = $1 AND tenant_id = $2 AND is_active FOR UPDATE",
    )
    .bind(room_id)
    .bind(tenant_id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(row.is_some())
}

/// Half-open overlap check for `[start, end)` against existing bookings of
/// a room, optionally excluding one booking (for updates).
async fn slot_taken(
    tx: &mut Transaction<'_, Postgres>,
    room_id: DbId,
    start: Timestamp,
    end: Timestamp,
    exclude_id: Option<DbId>,
) -> Result<bool, sqlx::Error> {
    let (taken,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(
             SELECT 1 FROM bookings
             WHERE room_id = $1
               AND start_time < $3
               AND end_time > $2
               AND ($4::bigint IS NULL OR id <> $4)
         )",
    )
    .bind(room_id)
    .bind(start)
    .bind(end)
    .bind(exclude_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(taken)
}
