//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

use crate::domain::{Coordinates, LocationData};

/// Create or replace a location. Every field is required.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(alias = "marker_color")]
    pub color: String,
}

impl From<LocationRequest> for LocationData {
    fn from(req: LocationRequest) -> Self {
        Self {
            name: req.name,
            latitude: req.latitude,
            longitude: req.longitude,
            color: req.color,
        }
    }
}

/// Route query parameters
///
/// Kept as raw strings so a missing value and an unparseable value can be
/// told apart. A supplied `0` is a real coordinate.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQueryParams {
    #[serde(alias = "latitude")]
    pub lat: Option<String>,
    #[serde(alias = "longitude")]
    pub lon: Option<String>,
}

/// Why a route query target could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteQueryError {
    #[error("latitude and longitude are required")]
    Missing,

    #[error("invalid latitude or longitude")]
    Invalid,
}

impl RouteQueryParams {
    /// Parse and range-check the target point.
    pub fn target(&self) -> Result<Coordinates, RouteQueryError> {
        let lat = supplied(&self.lat);
        let lon = supplied(&self.lon);

        let (Some(lat), Some(lon)) = (lat, lon) else {
            return Err(RouteQueryError::Missing);
        };

        let lat: f64 = lat.parse().map_err(|_| RouteQueryError::Invalid)?;
        let lon: f64 = lon.parse().map_err(|_| RouteQueryError::Invalid)?;

        Coordinates::new(lat, lon).map_err(|_| RouteQueryError::Invalid)
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
