//! Repository Implementations
//!
//! Concrete implementations of the domain `LocationRepository` trait.
//!
//! - **PgLocationRepository** - PostgreSQL `locations` table
//! - **InMemoryLocationRepository** - process-local store for tests and
//!   the `memory` storage backend
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use location_registry::domain::LocationRepository;
//! use location_registry::infrastructure::repositories::{
//!     InMemoryLocationRepository, PgLocationRepository,
//! };
//!
//! let repo: Arc<dyn LocationRepository> = match pool {
//!     Some(pool) => Arc::new(PgLocationRepository::new(pool)),
//!     None => Arc::new(InMemoryLocationRepository::new()),
//! };
//! ```

pub mod location_repository;
pub mod memory_repository;

pub use location_repository::PgLocationRepository;
pub use memory_repository::InMemoryLocationRepository;
