use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MET, DEFAULT_TERRAIN_FACTOR};
use crate::distance::validate_coordinate;
use crate::energy;
use crate::errors::{CalorieError, Result};

/// A GPS waypoint.
///
/// Altitude is always present. [`GeoPoint::new`] sets it to 0 m, and a
/// deserialized point without an `altitude` field also gets 0 m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
    /// Altitude in meters.
    #[serde(default)]
    pub altitude: f64,
}

impl GeoPoint {
    /// Creates a point at sea level (altitude 0 m).
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// Sets the altitude in meters.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Parses and validates a point from JSON.
    ///
    /// A missing `latitude` or `longitude` is an `InvalidCoordinate` with a NaN
    /// value; a missing `altitude` is 0 m. Text that is not a JSON object is
    /// an `InvalidConfig`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawGeoPoint = serde_json::from_str(json)?;
        let point = GeoPoint {
            latitude: raw.latitude.ok_or(CalorieError::InvalidCoordinate {
                field: "latitude",
                value: f64::NAN,
            })?,
            longitude: raw.longitude.ok_or(CalorieError::InvalidCoordinate {
                field: "longitude",
                value: f64::NAN,
            })?,
            altitude: raw.altitude,
        };
        validate_coordinate(&point)?;
        Ok(point)
    }

    /// Returns the point as a `geo` point (x = longitude, y = latitude).
    pub fn to_geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    altitude: f64,
}

/// Steepness between two waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeResult {
    /// Rise over run times 100. `f64::INFINITY` when the points share a position.
    pub percentage: f64,
    /// Inclination in degrees, [0, 90].
    pub angle_degrees: f64,
}

impl SlopeResult {
    pub const VERTICAL: SlopeResult = SlopeResult {
        percentage: f64::INFINITY,
        angle_degrees: 90.0,
    };

    /// Dimensionless grade ratio (0 = flat, 1 = 100%), the form Pandolf takes.
    pub fn grade(&self) -> f64 {
        self.percentage / 100.0
    }

    pub fn is_vertical(&self) -> bool {
        self.percentage.is_infinite()
    }
}

/// Every scalar one of the energy formulas can consume.
///
/// Weights are kilograms, `minutes` is the activity duration, `speed_mps` is
/// meters per second and `grade` is a ratio, not a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyExpenditureRequest {
    pub body_weight_kg: f64,
    #[serde(default)]
    pub load_weight_kg: f64,
    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub speed_mps: f64,
    #[serde(default)]
    pub grade: f64,
    #[serde(default = "default_terrain_factor")]
    pub terrain_factor: f64,
    #[serde(default = "default_met")]
    pub met: f64,
}

fn default_terrain_factor() -> f64 {
    DEFAULT_TERRAIN_FACTOR
}

fn default_met() -> f64 {
    DEFAULT_MET
}

impl EnergyExpenditureRequest {
    /// Creates a request for a walker of `body_weight_kg` carrying nothing,
    /// with the default MET and terrain factor.
    pub fn new(body_weight_kg: f64) -> Self {
        Self {
            body_weight_kg,
            load_weight_kg: 0.0,
            minutes: 0.0,
            speed_mps: 0.0,
            grade: 0.0,
            terrain_factor: DEFAULT_TERRAIN_FACTOR,
            met: DEFAULT_MET,
        }
    }

    pub fn with_load(mut self, load_weight_kg: f64) -> Self {
        self.load_weight_kg = load_weight_kg;
        self
    }

    pub fn with_minutes(mut self, minutes: f64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = speed_mps;
        self
    }

    /// Sets the grade ratio, typically `SlopeResult::grade()`.
    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_terrain_factor(mut self, terrain_factor: f64) -> Self {
        self.terrain_factor = terrain_factor;
        self
    }

    pub fn with_met(mut self, met: f64) -> Self {
        self.met = met;
        self
    }

    pub fn combined_weight_kg(&self) -> Result<f64> {
        energy::combined_weight_kg(self.body_weight_kg, self.load_weight_kg)
    }

    /// Total calories over `minutes` using the MET estimate.
    pub fn simple_calories(&self) -> Result<f64> {
        energy::simple_calories(self.met, self.minutes, self.combined_weight_kg()?)
    }

    /// Metabolic rate per minute from the Pandolf equation.
    pub fn pandolf_rate(&self) -> Result<f64> {
        energy::pandolf(
            self.body_weight_kg,
            self.load_weight_kg,
            self.speed_mps,
            self.grade,
            self.terrain_factor,
        )
    }
}
