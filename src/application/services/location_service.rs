//! Location Service
//!
//! The single entry point the HTTP layer uses for locations. CRUD calls pass
//! through to the repository after validation; the route query ranks every
//! stored location by distance from a target point.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    sort_by_distance, validate_location, Coordinates, Location, LocationData,
    LocationRepository, RepositoryError, ValidationError,
};

/// Location service trait
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Validate and store a new location
    async fn create_location(&self, data: LocationData) -> Result<Location, LocationError>;

    /// List every stored location (order unspecified)
    async fn get_all_locations(&self) -> Result<Vec<Location>, LocationError>;

    /// Get a location by ID
    async fn get_location_by_id(&self, id: i64) -> Result<Location, LocationError>;

    /// Validate and replace every field of an existing location
    async fn update_location(&self, id: i64, data: LocationData) -> Result<Location, LocationError>;

    /// All stored locations, nearest to `target` first
    async fn calculate_route(&self, target: Coordinates) -> Result<Vec<Location>, LocationError>;
}

/// Location service errors
///
/// Each repository failure maps to the variant of the same kind.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Location {0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<RepositoryError> for LocationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => LocationError::NotFound(id),
            RepositoryError::Storage(e) => LocationError::Storage(e),
        }
    }
}

/// LocationService implementation
pub struct LocationServiceImpl<R>
where
    R: LocationRepository + ?Sized,
{
    repo: Arc<R>,
}

impl<R> LocationServiceImpl<R>
where
    R: LocationRepository + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> LocationService for LocationServiceImpl<R>
where
    R: LocationRepository + ?Sized + 'static,
{
    async fn create_location(&self, data: LocationData) -> Result<Location, LocationError> {
        validate_location(&data)?;

        let location = self.repo.create(&data).await?;
        tracing::info!(location_id = location.id, name = %location.name, "Location created");

        Ok(location)
    }

    async fn get_all_locations(&self) -> Result<Vec<Location>, LocationError> {
        Ok(self.repo.find_all().await?)
    }

    async fn get_location_by_id(&self, id: i64) -> Result<Location, LocationError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    async fn update_location(&self, id: i64, data: LocationData) -> Result<Location, LocationError> {
        validate_location(&data)?;

        let location = self.repo.update(id, &data).await?;
        tracing::info!(location_id = id, "Location updated");

        Ok(location)
    }

    async fn calculate_route(&self, target: Coordinates) -> Result<Vec<Location>, LocationError> {
        let mut locations = self.repo.find_all().await?;
        sort_by_distance(target, &mut locations);

        tracing::debug!(%target, stops = locations.len(), "Route calculated");

        Ok(locations)
    }
}
