//! Tenant entity model, DTOs, and the plan-to-limit table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utaroom_core::types::{DbId, Timestamp};

/// Subscription plan, stored as the `plan_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "plan_type", rename_all = "lowercase")]
pub enum PlanType {
    Free,
    Pro,
    Business,
}

/// Tenant lifecycle status, stored as the `tenant_status` Postgres enum.
///
/// `Deleted` is a soft-delete flag; the row is never removed. Suspended and
/// deleted tenants are both excluded from subdomain resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "tenant_status", rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Suspended,
    Deleted,
}

/// Resource kinds that plans put a ceiling on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Rooms,
    Bookings,
}

/// Per-plan resource ceilings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanLimits {
    pub max_rooms: i64,
    pub max_bookings_per_month: i64,
}

impl PlanType {
    /// Lowercase name as stored and serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanType::Free => "free",
            PlanType::Pro => "pro",
            PlanType::Business => "business",
        }
    }

    /// The limit table. Pure data; both the billing check endpoint and the
    /// atomic room-creation guard read from here.
    pub fn limits(self) -> PlanLimits {
        match self {
            PlanType::Free => PlanLimits {
                max_rooms: 2,
                max_bookings_per_month: 50,
            },
            PlanType::Pro => PlanLimits {
                max_rooms: 10,
                max_bookings_per_month: 1000,
            },
            PlanType::Business => PlanLimits {
                max_rooms: 50,
                max_bookings_per_month: 10000,
            },
        }
    }

    pub fn limit_for(self, resource: ResourceType) -> i64 {
        let limits = self.limits();
        match resource {
            ResourceType::Rooms => limits.max_rooms,
            ResourceType::Bookings => limits.max_bookings_per_month,
        }
    }

    /// Whether a plan allows holding `proposed_count` of a resource.
    pub fn allows(self, resource: ResourceType, proposed_count: i64) -> bool {
        proposed_count <= self.limit_for(resource)
    }
}

/// A tenant row from the `tenants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub subdomain: String,
    pub plan_type: PlanType,
    pub status: TenantStatus,
    /// Opaque per-tenant settings (timezone, currency, ...).
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tenant. The subdomain is expected to be
/// normalized and validated by the caller before it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub subdomain: String,
    /// Defaults to `free` if omitted.
    pub plan_type: Option<PlanType>,
    pub settings: Option<serde_json::Value>,
}

/// DTO for updating an existing tenant. All fields are optional; the
/// subdomain is immutable after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub plan_type: Option<PlanType>,
    pub status: Option<TenantStatus>,
    pub settings: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_grow_with_plan() {
        assert!(PlanType::Free.limits().max_rooms < PlanType::Pro.limits().max_rooms);
        assert!(PlanType::Pro.limits().max_rooms < PlanType::Business.limits().max_rooms);
    }

    #[test]
    fn allows_is_inclusive_of_the_limit() {
        let max = PlanType::Free.limit_for(ResourceType::Rooms);
        assert!(PlanType::Free.allows(ResourceType::Rooms, max));
        assert!(!PlanType::Free.allows(ResourceType::Rooms, max + 1));
    }

    #[test]
    fn resource_type_parses_from_query_values() {
        let parsed: ResourceType = serde_json::from_str("\"rooms\"").unwrap();
        assert_eq!(parsed, ResourceType::Rooms);
        let parsed: ResourceType = serde_json::from_str("\"bookings\"").unwrap();
        assert_eq!(parsed, ResourceType::Bookings);
    }
}
