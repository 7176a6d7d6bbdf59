pub mod booking_repo;
pub mod business_hour_repo;
pub mod room_repo;
pub mod tenant_repo;

pub use booking_repo::{BookingRepo, BookingWrite};
pub use business_hour_repo::BusinessHourRepo;
pub use room_repo::RoomRepo;
pub use tenant_repo::TenantRepo;
