//! Integration tests for business hours: one row per (tenant, day),
//! upsert-replace semantics, and tenant-scoped deletes.

use chrono::NaiveTime;
use sqlx::PgPool;
use utaroom_core::types::DbId;
use utaroom_db::models::business_hour::{UpdateBusinessHour, UpsertBusinessHour};
use utaroom_db::models::tenant::CreateTenant;
use utaroom_db::repositories::{BusinessHourRepo, TenantRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_tenant(pool: &PgPool, subdomain: &str) -> DbId {
    TenantRepo::create(
        pool,
        &CreateTenant {
            name: format!("{subdomain} karaoke"),
            subdomain: subdomain.to_string(),
            plan_type: None,
            settings: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn t(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn open_day(day_of_week: i16, open: u32, close: u32) -> UpsertBusinessHour {
    UpsertBusinessHour {
        day_of_week,
        open_time: Some(t(open)),
        close_time: Some(t(close)),
        is_closed: None,
    }
}

// ---------------------------------------------------------------------------
// Test: upsert keeps one row per day and replaces on re-post
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn upsert_replaces_existing_day(pool: PgPool) {
    let tenant = seed_tenant(&pool, "hours").await;

    let monday = BusinessHourRepo::upsert(&pool, tenant, &open_day(1, 10, 22))
        .await
        .unwrap();
    assert_eq!(monday.open_time, Some(t(10)));

    // Re-posting the same day replaces instead of adding a second row.
    let replaced = BusinessHourRepo::upsert(&pool, tenant, &open_day(1, 12, 23))
        .await
        .unwrap();
    assert_eq!(replaced.id, monday.id);
    assert_eq!(replaced.open_time, Some(t(12)));

    let week = BusinessHourRepo::list_for_tenant(&pool, tenant).await.unwrap();
    assert_eq!(week.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: listing is ordered by day and scoped to the tenant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn listing_is_ordered_and_scoped(pool: PgPool) {
    let tenant = seed_tenant(&pool, "ordered").await;
    let other = seed_tenant(&pool, "other").await;

    for day in [5, 0, 3] {
        BusinessHourRepo::upsert(&pool, tenant, &open_day(day, 10, 20))
            .await
            .unwrap();
    }
    BusinessHourRepo::upsert(&pool, other, &open_day(2, 9, 18))
        .await
        .unwrap();

    let week = BusinessHourRepo::list_for_tenant(&pool, tenant).await.unwrap();
    let days: Vec<i16> = week.iter().map(|h| h.day_of_week).collect();
    assert_eq!(days, vec![0, 3, 5]);
    assert!(week.iter().all(|h| h.tenant_id == tenant));
}

// ---------------------------------------------------------------------------
// Test: partial update and closed days
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_and_closed_days(pool: PgPool) {
    let tenant = seed_tenant(&pool, "closed").await;
    let sunday = BusinessHourRepo::upsert(&pool, tenant, &open_day(0, 10, 20))
        .await
        .unwrap();

    let updated = BusinessHourRepo::update_for_tenant(
        &pool,
        tenant,
        sunday.id,
        &UpdateBusinessHour {
            open_time: None,
            close_time: None,
            is_closed: Some(true),
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert!(updated.is_closed);
    // Untouched fields keep their values.
    assert_eq!(updated.open_time, Some(t(10)));

    // Another tenant cannot update or delete the row.
    let other = seed_tenant(&pool, "stranger").await;
    let cross = BusinessHourRepo::update_for_tenant(
        &pool,
        other,
        sunday.id,
        &UpdateBusinessHour {
            open_time: None,
            close_time: None,
            is_closed: Some(false),
        },
    )
    .await
    .unwrap();
    assert!(cross.is_none());
    assert!(!BusinessHourRepo::delete_for_tenant(&pool, other, sunday.id)
        .await
        .unwrap());

    assert!(BusinessHourRepo::delete_for_tenant(&pool, tenant, sunday.id)
        .await
        .unwrap());
    assert!(BusinessHourRepo::list_for_tenant(&pool, tenant)
        .await
        .unwrap()
        .is_empty());
}
