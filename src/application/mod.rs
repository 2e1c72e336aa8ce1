//! Application Layer
//!
//! Contains the location service and the data transfer objects (DTOs)
//! exchanged with the HTTP layer. This layer orchestrates the flow of data
//! between the presentation and domain layers.

pub mod dto;
pub mod services;
