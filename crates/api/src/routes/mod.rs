pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{billing, bookings, business_hours, rooms, tenants, usage};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Resource routes address single rows with `?id=` and resolve their tenant
/// from `?tenant_id=`, `?subdomain=`, or the request's `Host` subdomain.
///
/// ```text
/// GET    /tenants                     -> get_or_list (?id= / ?subdomain=)
/// POST   /tenants                     -> create
/// PUT    /tenants?id=                 -> update
/// DELETE /tenants?id=                 -> soft delete
/// GET    /tenants/check-subdomain     -> availability check
///
/// GET    /rooms                       -> list (?id= / ?include_inactive=)
/// POST   /rooms                       -> create (plan-limited)
/// PUT    /rooms?id=                   -> update
/// DELETE /rooms?id=                   -> deactivate
///
/// GET    /business-hours              -> list week
/// POST   /business-hours              -> upsert one day
/// PUT    /business-hours?id=          -> update
/// DELETE /business-hours?id=          -> delete
///
/// GET    /bookings                    -> list (?id= / ?room_id= / ?from= / ?to=)
/// POST   /bookings                    -> create (overlap-checked)
/// PUT    /bookings?id=                -> update
/// DELETE /bookings?id=                -> cancel
///
/// GET    /usage                       -> usage vs. plan limits
/// GET    /billing                     -> plan summary
/// GET    /billing/check               -> limit check (pure comparison)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tenants",
            get(tenants::get_or_list)
                .post(tenants::create)
                .put(tenants::update)
                .delete(tenants::delete),
        )
        .route("/tenants/check-subdomain", get(tenants::check_subdomain))
        .route(
            "/rooms",
            get(rooms::list)
                .post(rooms::create)
                .put(rooms::update)
                .delete(rooms::delete),
        )
        .route(
            "/business-hours",
            get(business_hours::list)
                .post(business_hours::upsert)
                .put(business_hours::update)
                .delete(business_hours::delete),
        )
        .route(
            "/bookings",
            get(bookings::list)
                .post(bookings::create)
                .put(bookings::update)
                .delete(bookings::delete),
        )
        .route("/usage", get(usage::summary))
        .route("/billing", get(billing::summary))
        .route("/billing/check", get(billing::check))
}
