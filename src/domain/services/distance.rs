//! Great-circle distance and nearest-first ordering.

use ordered_float::OrderedFloat;

use crate::domain::entities::Location;
use crate::domain::value_objects::Coordinates;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Order `locations` by ascending distance from `target`.
///
/// Each distance is computed once. Locations at exactly the same distance
/// keep their input order, but callers should not depend on that.
pub fn sort_by_distance(target: Coordinates, locations: &mut [Location]) {
    locations.sort_by_cached_key(|location| {
        OrderedFloat(haversine_km(target, location.coordinates()))
    });
}
