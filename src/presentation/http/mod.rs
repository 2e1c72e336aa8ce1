//! HTTP API
//!
//! Axum router and request handlers.

pub mod handlers;
pub mod routes;
