//! # Domain Services
//!
//! Pure business rules that operate on domain entities.
//!
//! ## Services
//!
//! - **Validation**: Field checks a location must pass before any write
//! - **Distance**: Haversine great-circle distance and nearest-first ordering

mod distance;
mod validation;

pub use distance::*;
pub use validation::*;
