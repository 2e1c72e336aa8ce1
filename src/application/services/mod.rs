//! Application Services
//!
//! ## Available Services
//!
//! - **LocationService**: Location CRUD and nearest-first route ranking

pub mod location_service;

pub use location_service::{LocationError, LocationService, LocationServiceImpl};
