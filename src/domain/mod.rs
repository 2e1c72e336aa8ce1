//! # Domain Layer
//!
//! The domain layer contains the core rules of the location registry.
//! It is independent of any HTTP or configuration concerns.
//!
//! ## Structure
//!
//! - **entities**: The Location record and its repository trait
//! - **value_objects**: Coordinates and marker color format
//! - **services**: Field validation and distance ranking
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Validation and distance are pure functions

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
