//! Repository for the `business_hours` table.
//!
//! One row per (tenant, day of week); creation is an upsert so re-posting a
//! day replaces it instead of conflicting.

use sqlx::PgPool;
use utaroom_core::types::DbId;

use crate::models::business_hour::{BusinessHour, UpdateBusinessHour, UpsertBusinessHour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tenant_id, day_of_week, open_time, close_time, is_closed, created_at, updated_at";

/// Provides CRUD operations for business hours, scoped to one tenant.
pub struct BusinessHourRepo;

impl BusinessHourRepo {
    /// Create or replace a day's hours for a tenant.
    ///
    /// Uses `ON CONFLICT (tenant_id, day_of_week) DO UPDATE` to guarantee
    /// at most one row per day.
    pub async fn upsert(
        pool: &PgPool,
        tenant_id: DbId,
        input: &UpsertBusinessHour,
    ) -> Result<BusinessHour, sqlx::Error> {
        let query = format!(
            "INSERT INTO business_hours (tenant_id, day_of_week, open_time, close_time, is_closed)
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE))
             ON CONFLICT (tenant_id, day_of_week) DO UPDATE
             SET open_time = EXCLUDED.open_time,
                 close_time = EXCLUDED.close_time,
                 is_closed = EXCLUDED.is_closed,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusinessHour>(&query)
            .bind(tenant_id)
            .bind(input.day_of_week)
            .bind(input.open_time)
            .bind(input.close_time)
            .bind(input.is_closed)
            .fetch_one(pool)
            .await
    }

    /// Find a day row by ID within a tenant.
    pub async fn find_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<BusinessHour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM business_hours WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, BusinessHour>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tenant's hours ordered by day of week.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<BusinessHour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM business_hours WHERE tenant_id = $1 ORDER BY day_of_week"
        );
        sqlx::query_as::<_, BusinessHour>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a day row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the row does not exist within the tenant.
    pub async fn update_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateBusinessHour,
    ) -> Result<Option<BusinessHour>, sqlx::Error> {
        let query = format!(
            "UPDATE business_hours SET
                open_time = COALESCE($3, open_time),
                close_time = COALESCE($4, close_time),
                is_closed = COALESCE($5, is_closed),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusinessHour>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(input.open_time)
            .bind(input.close_time)
            .bind(input.is_closed)
            .fetch_optional(pool)
            .await
    }

    /// Remove a day row entirely. Returns `true` if a row was deleted.
    pub async fn delete_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM business_hours WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
