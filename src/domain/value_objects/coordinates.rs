//! Geographic coordinate value object.

use std::fmt;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A point on the Earth's surface in decimal degrees.
///
/// `Coordinates::new` only accepts finite values inside the valid ranges,
/// so a constructed value is always a real position. The zero point
/// (0, 0) is a valid position like any other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

/// Returned when a latitude/longitude pair is outside the valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("coordinates ({latitude}, {longitude}) are out of range")]
pub struct InvalidCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair, rejecting NaN, infinities and out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if is_valid_latitude(latitude) && is_valid_longitude(longitude) {
            Ok(Self { latitude, longitude })
        } else {
            Err(InvalidCoordinates { latitude, longitude })
        }
    }

    /// Build from values already persisted by a repository; the write path
    /// validated them, so no range check is repeated here.
    pub(crate) fn from_stored(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Latitude in [-90, 90]. NaN never passes.
pub fn is_valid_latitude(latitude: f64) -> bool {
    LATITUDE_RANGE.contains(&latitude)
}

/// Longitude in [-180, 180]. NaN never passes.
pub fn is_valid_longitude(longitude: f64) -> bool {
    LONGITUDE_RANGE.contains(&longitude)
}
