//! Slope and grade between two waypoints.

use tracing::debug;

use crate::distance::{degs, point_distance};
use crate::errors::{CalorieError, Result};
use crate::models::{GeoPoint, SlopeResult};

/// Largest angle a slope with a non-zero run can report, just under 90 degrees.
const MAX_NON_VERTICAL_DEGREES: f64 = f64::from_bits(90.0_f64.to_bits() - 1);

/// Absolute difference between two altitudes, in meters.
pub fn vertical_interval(alt1: f64, alt2: f64) -> f64 {
    (alt2 - alt1).abs()
}

/// Computes the slope from `point1` to `point2`.
///
/// Both outputs are unsigned: climbing and descending the same pair give the
/// same result. When the points share a latitude/longitude the horizontal run
/// is zero and the result is [`SlopeResult::VERTICAL`] (infinite percentage,
/// 90 degrees), whatever the altitudes.
///
/// Any non-zero run gives a finite percentage and an angle below 90 degrees,
/// so only a shared position is ever reported as vertical.
///
/// # Errors
/// Returns `InvalidCoordinate` if either point is out of range or not finite,
/// or if the altitudes are too far apart to represent their difference.
pub fn slope(point1: &GeoPoint, point2: &GeoPoint) -> Result<SlopeResult> {
    let horizontal_distance = point_distance(point1, point2)?;
    let vertical = vertical_interval(point1.altitude, point2.altitude);
    if !vertical.is_finite() {
        return Err(CalorieError::InvalidCoordinate {
            field: "altitude",
            value: vertical,
        });
    }

    if horizontal_distance == 0.0 {
        debug!(target: "calories", vertical, "zero horizontal distance, treating as vertical");
        return Ok(SlopeResult::VERTICAL);
    }

    let ratio = vertical / horizontal_distance;
    let result = SlopeResult {
        percentage: (ratio * 100.0).min(f64::MAX),
        angle_degrees: degs(ratio.atan()).min(MAX_NON_VERTICAL_DEGREES),
    };

    debug!(
        target: "calories",
        horizontal_distance,
        vertical,
        percentage = result.percentage,
        angle_degrees = result.angle_degrees,
        "calculated slope"
    );

    Ok(result)
}
