//! Handlers for the `/tenants` resource.
//!
//! Tenants are the one resource addressed directly rather than through the
//! tenant-context extractor: these endpoints manage the tenants themselves.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utaroom_core::error::CoreError;
use utaroom_core::tenancy::{is_valid_subdomain, normalize_subdomain};
use utaroom_core::types::DbId;
use utaroom_core::validation::validate_name;
use utaroom_db::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use utaroom_db::repositories::TenantRepo;

use crate::error::{AppError, AppResult};
use crate::query::IdParam;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TenantQuery {
    pub id: Option<DbId>,
    pub subdomain: Option<String>,
}

/// GET /api/tenants — `?id=` or `?subdomain=` select one record,
/// otherwise all non-deleted tenants are listed.
pub async fn get_or_list(
    State(state): State<AppState>,
    Query(params): Query<TenantQuery>,
) -> AppResult<Response> {
    if let Some(id) = params.id {
        let tenant = TenantRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Tenant",
                id,
            }))?;
        return Ok(ApiResponse::ok(tenant).into_response());
    }

    if let Some(subdomain) = params.subdomain {
        let tenant = TenantRepo::find_active_by_subdomain(&state.pool, &subdomain)
            .await?
            .ok_or(AppError::InvalidSubdomain(subdomain))?;
        return Ok(ApiResponse::ok(tenant).into_response());
    }

    let tenants = TenantRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok(tenants).into_response())
}

/// POST /api/tenants
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTenant>,
) -> AppResult<(StatusCode, Json<ApiResponse<Tenant>>)> {
    validate_name("name", &input.name)?;

    let subdomain = input.subdomain.trim().to_ascii_lowercase();
    if !is_valid_subdomain(&subdomain) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "subdomain must be 1-63 characters of [a-z0-9-], not reserved, \
             and not start or end with a hyphen: {subdomain:?}"
        ))));
    }

    if TenantRepo::subdomain_taken(&state.pool, &subdomain).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Subdomain '{subdomain}' is already taken"
        ))));
    }

    // The uq_tenants_subdomain constraint catches the race where two
    // signups pass the check concurrently; it surfaces as 409 as well.
    let tenant = TenantRepo::create(
        &state.pool,
        &CreateTenant {
            name: input.name,
            subdomain,
            plan_type: input.plan_type,
            settings: input.settings,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(tenant)))
}

/// PUT /api/tenants?id=
pub async fn update(
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
    Json(input): Json<UpdateTenant>,
) -> AppResult<Json<ApiResponse<Tenant>>> {
    let id = target.require()?;
    if let Some(name) = &input.name {
        validate_name("name", name)?;
    }

    let tenant = TenantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tenant",
            id,
        }))?;
    Ok(ApiResponse::ok(tenant))
}

/// DELETE /api/tenants?id= — soft delete; the row stays but the tenant's
/// subdomain stops resolving.
pub async fn delete(
    State(state): State<AppState>,
    Query(target): Query<IdParam>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = target.require()?;
    let deleted = TenantRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(ApiResponse::message_only("Tenant deleted"))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Tenant",
            id,
        }))
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckSubdomainParams {
    pub subdomain: Option<String>,
}

/// Availability report for a candidate subdomain.
#[derive(Debug, Serialize)]
pub struct SubdomainAvailability {
    /// The candidate after normalization (lowercased, disallowed
    /// characters stripped).
    pub subdomain: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// GET /api/tenants/check-subdomain?subdomain= — signup-flow availability
/// check. Pure validation plus an existence query; no side effects.
pub async fn check_subdomain(
    State(state): State<AppState>,
    Query(params): Query<CheckSubdomainParams>,
) -> AppResult<Json<ApiResponse<SubdomainAvailability>>> {
    let raw = params.subdomain.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Missing required subdomain query parameter".into(),
        ))
    })?;

    let subdomain = normalize_subdomain(&raw);
    if !is_valid_subdomain(&subdomain) {
        return Ok(ApiResponse::ok(SubdomainAvailability {
            subdomain,
            available: false,
            reason: Some("subdomain is empty, reserved, or malformed after normalization".into()),
        }));
    }

    let taken = TenantRepo::subdomain_taken(&state.pool, &subdomain).await?;
    Ok(ApiResponse::ok(SubdomainAvailability {
        subdomain,
        available: !taken,
        reason: taken.then(|| "subdomain is already taken".into()),
    }))
}
