//! Presets and defaults for the energy formulas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalorieError, Result};

/// MET used by the simple estimator when none is given (hiking).
pub const DEFAULT_MET: f64 = Met::HIKING;

/// Pandolf terrain factor used when none is given.
///
/// Light brush (1.2) is the usual trail surface for a ruck; pass
/// [`Terrain::Blacktop`] explicitly for pavement.
pub const DEFAULT_TERRAIN_FACTOR: f64 = 1.2;

/// Kilograms per pound.
pub const KG_PER_POUND: f64 = 0.4536;

/// Pre-defined Metabolic Equivalent of Task values.
#[derive(Debug, Clone, Copy)]
pub struct Met;

impl Met {
    /// General hiking.
    pub const HIKING: f64 = 7.5;

    /// Backpacking with a loaded pack.
    pub const BACKPACKING: f64 = 7.0;

    /// General weight lifting.
    pub const WEIGHT_LIFTING: f64 = 3.5;
}

/// Surface types with their Pandolf terrain coefficient (n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Paved road or treadmill.
    Blacktop,
    DirtRoad,
    #[default]
    LightBrush,
    HeavyBrush,
    SwampyBog,
    LooseSand,
}

impl Terrain {
    pub fn factor(self) -> f64 {
        match self {
            Terrain::Blacktop => 1.0,
            Terrain::DirtRoad => 1.1,
            Terrain::LightBrush => 1.2,
            Terrain::HeavyBrush => 1.5,
            Terrain::SwampyBog => 1.8,
            Terrain::LooseSand => 2.1,
        }
    }
}

/// Defaults applied when a caller leaves MET or terrain unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyDefaults {
    /// MET for the simple estimator.
    pub met: f64,

    /// Pandolf terrain factor (n).
    pub terrain_factor: f64,
}

impl Default for EnergyDefaults {
    fn default() -> Self {
        Self {
            met: DEFAULT_MET,
            terrain_factor: DEFAULT_TERRAIN_FACTOR,
        }
    }
}

impl EnergyDefaults {
    /// Builds defaults around a named surface.
    pub fn for_terrain(terrain: Terrain) -> Self {
        Self {
            terrain_factor: terrain.factor(),
            ..Default::default()
        }
    }

    /// Parses and validates defaults from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: EnergyDefaults = serde_json::from_str(json)?;
        defaults.validate()?;
        debug!(
            target: "calories",
            met = defaults.met,
            terrain_factor = defaults.terrain_factor,
            "loaded energy defaults"
        );
        Ok(defaults)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.met.is_finite() || self.met <= 0.0 {
            return Err(CalorieError::InvalidParameter {
                name: "met",
                value: self.met,
                reason: "must be positive",
            });
        }
        if !self.terrain_factor.is_finite() || self.terrain_factor < 1.0 {
            return Err(CalorieError::InvalidParameter {
                name: "terrain_factor",
                value: self.terrain_factor,
                reason: "must be at least 1.0",
            });
        }
        Ok(())
    }
}
