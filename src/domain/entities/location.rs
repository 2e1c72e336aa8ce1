//! Location entity and repository trait.
//!
//! Maps to the `locations` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::Coordinates;

/// A stored location.
///
/// Maps to the `locations` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - latitude: DOUBLE PRECISION NOT NULL
/// - longitude: DOUBLE PRECISION NOT NULL
/// - color: VARCHAR(7) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Identifier assigned by storage on creation
    pub id: i64,

    /// Display label (never empty)
    pub name: String,

    /// Degrees, [-90, 90]
    pub latitude: f64,

    /// Degrees, [-180, 180]
    pub longitude: f64,

    /// Marker color as `#RRGGBB`
    pub color: String,

    /// Creation timestamp, maintained by storage
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, maintained by storage
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// The caller-editable fields of this record.
    pub fn data(&self) -> LocationData {
        LocationData {
            name: self.name.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            color: self.color.clone(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::from_stored(self.latitude, self.longitude)
    }
}

/// The fields a caller supplies when creating or replacing a location.
///
/// Updates are full replacements, so every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationData {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
}

/// Failures surfaced by a [`LocationRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Location {0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Repository trait for Location data access operations.
///
/// No delete operation is exposed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Persist a new location and return it with its assigned id.
    async fn create(&self, data: &LocationData) -> Result<Location, RepositoryError>;

    /// Every stored location, in no particular order.
    async fn find_all(&self) -> Result<Vec<Location>, RepositoryError>;

    /// Find a location by id; `NotFound` if no such record exists.
    async fn find_by_id(&self, id: i64) -> Result<Location, RepositoryError>;

    /// Replace all caller fields of an existing location.
    ///
    /// Fails with `NotFound` rather than inserting when `id` does not exist.
    async fn update(&self, id: i64, data: &LocationData) -> Result<Location, RepositoryError>;
}
