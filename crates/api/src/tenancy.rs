//! Tenant resolution for scoped handlers.
//!
//! The database half of the subdomain resolver: turns a request into the
//! tenant it acts on, or rejects it. One read query per request, no caching.

use axum::extract::{FromRequestParts, Query};
use axum::http::header::HOST;
use axum::http::request::Parts;
use serde::Deserialize;
use utaroom_core::error::CoreError;
use utaroom_core::tenancy::{parse_host, HostTenancy};
use utaroom_core::types::DbId;
use utaroom_db::models::tenant::Tenant;
use utaroom_db::repositories::TenantRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Explicit tenant-scope overrides accepted on any scoped route.
#[derive(Debug, Deserialize)]
struct ScopeParams {
    tenant_id: Option<DbId>,
    subdomain: Option<String>,
}

/// The active tenant a request acts on.
///
/// Resolution order: explicit `tenant_id` query parameter, explicit
/// `subdomain` query parameter, then the `Host` header's leftmost label.
/// Requests that resolve to the main domain with no override are rejected
/// with a validation error rather than falling back to any tenant — the
/// extractor fails before the handler body runs, so no resource query is
/// ever issued without a tenant.
///
/// ```ignore
/// async fn list(ctx: TenantContext, State(state): State<AppState>) -> AppResult<...> {
///     RoomRepo::list_for_tenant(&state.pool, ctx.tenant.id, false).await?
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant: Tenant,
}

impl FromRequestParts<AppState> for TenantContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ScopeParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::Core(CoreError::Validation(
                    "Malformed tenant_id or subdomain parameter".into(),
                ))
            })?;

        if let Some(id) = params.tenant_id {
            let tenant = TenantRepo::find_active_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Tenant",
                    id,
                }))?;
            return Ok(TenantContext { tenant });
        }

        let candidate = match params.subdomain {
            Some(subdomain) => Some(subdomain),
            None => {
                let host = parts
                    .headers
                    .get(HOST)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                match parse_host(host, &state.config.base_domain) {
                    HostTenancy::Candidate(label) => Some(label),
                    HostTenancy::MainDomain => None,
                }
            }
        };

        let Some(candidate) = candidate else {
            return Err(AppError::Core(CoreError::Validation(
                "Missing tenant context: provide tenant_id, subdomain, or use a tenant subdomain host".into(),
            )));
        };

        let tenant = TenantRepo::find_active_by_subdomain(&state.pool, &candidate)
            .await?
            .ok_or_else(|| AppError::InvalidSubdomain(candidate))?;

        Ok(TenantContext { tenant })
    }
}
