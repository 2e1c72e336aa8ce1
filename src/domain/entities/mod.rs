//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **Location**: A named, colored point on the map
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod location;

pub use location::{Location, LocationData, LocationRepository, RepositoryError};

#[cfg(test)]
pub use location::MockLocationRepository;
