pub mod booking;
pub mod business_hour;
pub mod room;
pub mod tenant;
