//! Repository for the `rooms` table. Every query is tenant-scoped.

use sqlx::PgPool;
use utaroom_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tenant_id, name, capacity, category, price_per_hour, is_active, created_at, updated_at";

/// Provides CRUD operations for rooms, scoped to one tenant.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a room if the tenant is still under its plan's room ceiling.
    ///
    /// The count and the insert run in one transaction, serialized on the
    /// tenant row, so two concurrent creates cannot both pass the check.
    /// Returns `None` when the ceiling is already reached.
    pub async fn create_within_limit(
        pool: &PgPool,
        tenant_id: DbId,
        max_rooms: i64,
        input: &CreateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM tenants WHERE id = $1 FOR UPDATE")
            .bind(tenant_id)
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM rooms WHERE tenant_id = $1 AND is_active")
                .bind(tenant_id)
                .fetch_one(&mut *tx)
                .await?;
        if count >= max_rooms {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO rooms (tenant_id, name, capacity, category, price_per_hour)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.category)
            .bind(input.price_per_hour)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(room))
    }

    /// Find a room by ID within a tenant, active or not.
    pub async fn find_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tenant's rooms in id order. Deactivated rooms are hidden
    /// unless `include_inactive` is set.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms
             WHERE tenant_id = $1 AND (is_active OR $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(tenant_id)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Count a tenant's active rooms. Used by the usage endpoint.
    pub async fn count_active(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM rooms WHERE tenant_id = $1 AND is_active")
                .bind(tenant_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the room does not exist within the tenant, so a
    /// cross-tenant id behaves exactly like an unknown id.
    pub async fn update_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                name = COALESCE($3, name),
                capacity = COALESCE($4, capacity),
                category = COALESCE($5, category),
                price_per_hour = COALESCE($6, price_per_hour),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.category)
            .bind(input.price_per_hour)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a room by flipping `is_active`. Returns `true` if a row
    /// was deactivated.
    pub async fn deactivate(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rooms SET is_active = FALSE, updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2 AND is_active",
        )
        .bind(id)
        .bind(tenant_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
