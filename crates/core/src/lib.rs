//! Domain logic shared across the utaroom workspace.
//!
//! Pure types and rules only: no database or HTTP dependencies live here.

pub mod error;
pub mod tenancy;
pub mod types;
pub mod validation;
