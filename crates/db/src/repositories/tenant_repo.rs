//! Repository for the `tenants` table.
//!
//! Soft delete is a status flag: `status = 'deleted'` rows stay in storage
//! but are invisible to every query here except `subdomain_taken` (which
//! deliberately frees the subdomain once the owner is deleted).

use sqlx::PgPool;
use utaroom_core::types::DbId;

use crate::models::tenant::{CreateTenant, Tenant, UpdateTenant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, subdomain, plan_type, status, settings, created_at, updated_at";

/// Provides CRUD operations and resolution lookups for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant, returning the created row.
    ///
    /// Defaults `plan_type` to `free` and `settings` to `{}` when omitted.
    /// The `uq_tenants_subdomain` constraint backs up the caller's
    /// availability check.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants (name, subdomain, plan_type, settings)
             VALUES ($1, $2, COALESCE($3, 'free'::plan_type), COALESCE($4, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(&input.name)
            .bind(&input.subdomain)
            .bind(input.plan_type)
            .bind(&input.settings)
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1 AND status <> 'deleted'");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an *active* tenant by ID. Used when a request acts on behalf of
    /// a tenant; suspended tenants cannot be acted on.
    pub async fn find_active_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1 AND status = 'active'");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a subdomain candidate to an active tenant, case-insensitively.
    /// Suspended and soft-deleted tenants never resolve.
    pub async fn find_active_by_subdomain(
        pool: &PgPool,
        subdomain: &str,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tenants
             WHERE LOWER(subdomain) = LOWER($1) AND status = 'active'"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(subdomain)
            .fetch_optional(pool)
            .await
    }

    /// Whether any non-deleted tenant already owns a subdomain.
    pub async fn subdomain_taken(pool: &PgPool, subdomain: &str) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM tenants
                 WHERE LOWER(subdomain) = LOWER($1) AND status <> 'deleted'
             )",
        )
        .bind(subdomain)
        .fetch_one(pool)
        .await?;
        Ok(taken)
    }

    /// List all non-deleted tenants in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE status <> 'deleted' ORDER BY id");
        sqlx::query_as::<_, Tenant>(&query).fetch_all(pool).await
    }

    /// Update a tenant. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no non-deleted row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET
                name = COALESCE($2, name),
                plan_type = COALESCE($3, plan_type),
                status = COALESCE($4, status),
                settings = COALESCE($5, settings),
                updated_at = NOW()
             WHERE id = $1 AND status <> 'deleted'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.plan_type)
            .bind(input.status)
            .bind(&input.settings)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a tenant. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tenants SET status = 'deleted', updated_at = NOW()
             WHERE id = $1 AND status <> 'deleted'",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
