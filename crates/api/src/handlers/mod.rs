pub mod billing;
pub mod bookings;
pub mod business_hours;
pub mod rooms;
pub mod tenants;
pub mod usage;
