//! Energy expenditure formulas.
//!
//! All weights are kilograms. Converting from pounds is the caller's job;
//! [`pounds_to_kg`] uses 1 lb = 0.4536 kg.

use tracing::debug;

use crate::config::KG_PER_POUND;
use crate::errors::{CalorieError, Result};

/// Oxygen uptake of one MET, ml O2 per kg per minute.
const MET_OXYGEN_ML: f64 = 3.5;

/// Divisor turning `MET * 3.5 * kg` into kilocalories per minute.
const KCAL_DIVISOR: f64 = 200.0;

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalorieError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

fn positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalorieError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Body weight plus carried load, in kilograms.
pub fn combined_weight_kg(body_weight_kg: f64, load_weight_kg: f64) -> Result<f64> {
    Ok(non_negative("body_weight_kg", body_weight_kg)?
        + non_negative("load_weight_kg", load_weight_kg)?)
}

/// Estimates total calories burned over `minutes` from a MET value.
///
/// `(MET * 3.5 * weight) / 200 * minutes`, with `combined_weight_kg` being
/// body weight plus pack weight. No account is taken of terrain or grade.
/// Use [`crate::config::DEFAULT_MET`] (7.5, hiking) when no better value is known.
///
/// # Errors
/// `InvalidParameter` if `met` is not positive, or `minutes` or
/// `combined_weight_kg` is negative or not finite.
pub fn simple_calories(met: f64, minutes: f64, combined_weight_kg: f64) -> Result<f64> {
    let met = positive("met", met)?;
    let minutes = non_negative("minutes", minutes)?;
    let weight = non_negative("combined_weight_kg", combined_weight_kg)?;

    debug!(target: "calories", met, minutes, weight, "calculating simple calories");
    Ok((met * MET_OXYGEN_ML * weight) / KCAL_DIVISOR * minutes)
}

/// Metabolic rate per minute from the Pandolf load-carriage equation.
///
/// ```text
/// M = 1.5W + 2.0(W + L)(L / W) + n(W + L)(1.5V + 0.35VG)
/// ```
///
/// * `body_weight_kg` (W) must be positive, since the load term divides by it.
/// * `load_weight_kg` (L) is the carried load.
/// * `speed_mps` (V) is walking speed in meters per second.
/// * `grade` (G) is a ratio (0 flat, 1 for 100%), e.g. `SlopeResult::grade()`.
/// * `terrain_factor` (n) is at least 1.0; see [`crate::config::Terrain`].
///
/// Multiply by the duration to get a total.
///
/// # Errors
/// `InvalidParameter` for any non-physical input.
pub fn pandolf(
    body_weight_kg: f64,
    load_weight_kg: f64,
    speed_mps: f64,
    grade: f64,
    terrain_factor: f64,
) -> Result<f64> {
    let w = positive("body_weight_kg", body_weight_kg)?;
    let l = non_negative("load_weight_kg", load_weight_kg)?;
    let v = non_negative("speed_mps", speed_mps)?;
    if !grade.is_finite() {
        return Err(CalorieError::InvalidParameter {
            name: "grade",
            value: grade,
            reason: "must be finite",
        });
    }
    if !terrain_factor.is_finite() || terrain_factor < 1.0 {
        return Err(CalorieError::InvalidParameter {
            name: "terrain_factor",
            value: terrain_factor,
            reason: "must be at least 1.0",
        });
    }
    let n = terrain_factor;
    let g = grade;

    debug!(target: "calories", w, l, v, g, n, "calculating Pandolf metabolic rate");
    Ok(1.5 * w + 2.0 * (w + l) * (l / w) + n * (w + l) * (1.5 * v + 0.35 * v * g))
}
