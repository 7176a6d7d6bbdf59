//! Handlers for the `/billing` resource: plan info and the limit check.
//!
//! The check endpoint is a pure comparison against the plan-to-limit table;
//! nothing here persists anything.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use utaroom_core::error::CoreError;
use utaroom_db::models::tenant::{PlanLimits, PlanType, ResourceType};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::tenancy::TenantContext;

/// Plan summary returned by GET /api/billing.
#[derive(Debug, Serialize)]
pub struct BillingSummary {
    pub plan_type: PlanType,
    pub limits: PlanLimits,
}

/// GET /api/billing — the resolved tenant's plan and its limit table row.
pub async fn summary(ctx: TenantContext) -> Json<ApiResponse<BillingSummary>> {
    ApiResponse::ok(BillingSummary {
        plan_type: ctx.tenant.plan_type,
        limits: ctx.tenant.plan_type.limits(),
    })
}

#[derive(Debug, Deserialize)]
pub struct BillingCheckParams {
    pub resource_type: Option<ResourceType>,
    pub resource_count: Option<i64>,
}

/// Result of a plan-limit check.
#[derive(Debug, Serialize)]
pub struct BillingCheck {
    pub resource_type: ResourceType,
    pub requested: i64,
    pub limit: i64,
    pub allowed: bool,
}

/// GET /api/billing/check?resource_type=&resource_count= — would the
/// tenant's plan allow holding `resource_count` of `resource_type`?
pub async fn check(
    ctx: TenantContext,
    Query(params): Query<BillingCheckParams>,
) -> AppResult<Json<ApiResponse<BillingCheck>>> {
    let resource_type = params.resource_type.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Missing required resource_type query parameter (rooms or bookings)".into(),
        ))
    })?;
    let requested = params.resource_count.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Missing required resource_count query parameter".into(),
        ))
    })?;
    if requested < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "resource_count must not be negative".into(),
        )));
    }

    let plan = ctx.tenant.plan_type;
    Ok(ApiResponse::ok(BillingCheck {
        resource_type,
        requested,
        limit: plan.limit_for(resource_type),
        allowed: plan.allows(resource_type, requested),
    }))
}
