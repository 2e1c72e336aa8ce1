//! In-memory Location Repository
//!
//! Process-local implementation of the LocationRepository trait. Used by
//! tests and by the `memory` storage backend; data does not survive a
//! restart.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Location, LocationData, LocationRepository, RepositoryError};

/// In-memory location store keyed by id.
///
/// Ids start at 1 and are never reused. Each operation holds the lock for
/// its whole read or write, matching single-row atomicity of a database.
pub struct InMemoryLocationRepository {
    locations: RwLock<BTreeMap<i64, Location>>,
    next_id: AtomicI64,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self {
            locations: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.read().is_empty()
    }
}

impl Default for InMemoryLocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn create(&self, data: &LocationData) -> Result<Location, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let location = Location {
            id,
            name: data.name.clone(),
            latitude: data.latitude,
            longitude: data.longitude,
            color: data.color.clone(),
            created_at: now,
            updated_at: now,
        };

        self.locations.write().insert(id, location.clone());
        Ok(location)
    }

    async fn find_all(&self) -> Result<Vec<Location>, RepositoryError> {
        Ok(self.locations.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Location, RepositoryError> {
        self.locations
            .read()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, data: &LocationData) -> Result<Location, RepositoryError> {
        let mut locations = self.locations.write();
        let location = locations.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;

        location.name = data.name.clone();
        location.latitude = data.latitude;
        location.longitude = data.longitude;
        location.color = data.color.clone();
        location.updated_at = Utc::now();

        Ok(location.clone())
    }
}
