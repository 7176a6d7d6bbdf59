//! HTTP API for the utaroom multi-tenant booking backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
pub mod tenancy;
