//! Horizontal distance between waypoints.

use geo::{Distance as _, Haversine};
use tracing::trace;

use crate::errors::{CalorieError, Result};
use crate::models::GeoPoint;

/// Converts degrees to radians.
pub fn rads(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn degs(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Checks that latitude, longitude and altitude are finite and latitude and
/// longitude are within their ranges.
pub fn validate_coordinate(point: &GeoPoint) -> Result<()> {
    if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
        return Err(CalorieError::InvalidCoordinate {
            field: "latitude",
            value: point.latitude,
        });
    }
    if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
        return Err(CalorieError::InvalidCoordinate {
            field: "longitude",
            value: point.longitude,
        });
    }
    if !point.altitude.is_finite() {
        return Err(CalorieError::InvalidCoordinate {
            field: "altitude",
            value: point.altitude,
        });
    }
    Ok(())
}

/// Whether two validated points name the same place on the globe.
///
/// Longitudes of 180 and -180 are the same meridian, and every longitude
/// meets at either pole.
pub fn same_position(a: &GeoPoint, b: &GeoPoint) -> bool {
    if a.latitude != b.latitude {
        return false;
    }
    a.latitude.abs() == 90.0
        || a.longitude == b.longitude
        || (a.longitude.abs() == 180.0 && b.longitude.abs() == 180.0)
}

/// Great-circle distance in meters between two points, ignoring altitude.
///
/// Uses the haversine formula on a spherical Earth of mean radius
/// (~6,371 km). Identical positions yield exactly 0.
pub fn point_distance(a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;

    if same_position(a, b) {
        return Ok(0.0);
    }

    let distance = Haversine.distance(a.to_geo(), b.to_geo());
    trace!(target: "calories", distance, "point distance");
    Ok(distance)
}
