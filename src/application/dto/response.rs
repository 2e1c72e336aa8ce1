//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::Location;

/// Location response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            color: location.color,
            created_at: location.created_at.to_rfc3339(),
            updated_at: location.updated_at.to_rfc3339(),
        }
    }
}

impl LocationResponse {
    pub fn from_list(locations: Vec<Location>) -> Vec<Self> {
        locations.into_iter().map(Self::from).collect()
    }
}
