//! Calorie estimates for hiking and rucking.
//!
//! This crate derives terrain grade from pairs of GPS waypoints and feeds it,
//! together with body weight, load, speed and duration, into two energy
//! expenditure models: a MET-based estimate and the Pandolf equation.
//!
//! Units are kilograms, meters, meters per second and minutes throughout.
//! Grade is passed to the energy models as a ratio, not a percentage.
//!
//! # Quick Start
//!
//! ```rust
//! use calories::prelude::*;
//!
//! let start = GeoPoint::new(34.0522, -118.2437).with_altitude(100.0);
//! let end = GeoPoint::new(34.0530, -118.2420).with_altitude(150.0);
//!
//! let grade = slope(&start, &end)?.grade();
//! let per_minute = pandolf(80.0, 20.0, 1.3, grade, Terrain::LightBrush.factor())?;
//! let total = simple_calories(Met::HIKING, 45.0, combined_weight_kg(80.0, 20.0)?)?;
//! assert!(per_minute > 0.0 && total > 0.0);
//! # Ok::<(), calories::CalorieError>(())
//! ```
//!
//! Diagnostics are emitted as `tracing` events under the `calories` target.
//! Installing a subscriber is up to the host application.

pub mod config;
pub mod distance;
pub mod energy;
pub mod errors;
pub mod models;
pub mod slope;

pub use errors::{CalorieError, Result};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        DEFAULT_MET, DEFAULT_TERRAIN_FACTOR, EnergyDefaults, KG_PER_POUND, Met, Terrain,
    };
    pub use crate::distance::{degs, point_distance, rads, same_position, validate_coordinate};
    pub use crate::energy::{combined_weight_kg, pandolf, pounds_to_kg, simple_calories};
    pub use crate::errors::CalorieError;
    pub use crate::models::{EnergyExpenditureRequest, GeoPoint, SlopeResult};
    pub use crate::slope::{slope, vertical_interval};
}
