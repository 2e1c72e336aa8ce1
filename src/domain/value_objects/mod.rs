//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Coordinates**: A latitude/longitude pair in decimal degrees
//! - **Hex color**: `#RRGGBB` marker color format checks

mod coordinates;
mod hex_color;

pub use coordinates::*;
pub use hex_color::*;
