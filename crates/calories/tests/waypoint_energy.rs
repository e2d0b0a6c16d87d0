//! Integration tests combining waypoint slopes with the energy models.
//!
//! These tests verify:
//! - Distance and slope invariants over randomly sampled coordinates
//! - Feeding a slope grade into the Pandolf equation
//! - That installing a tracing subscriber leaves every result unchanged

use calories::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

fn random_point(rng: &mut StdRng) -> GeoPoint {
    GeoPoint::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
        .with_altitude(rng.gen_range(-100.0..4000.0))
}

/// A point within roughly a kilometer of `origin`, the scale GPS waypoints are logged at.
fn nearby_point(rng: &mut StdRng, origin: &GeoPoint) -> GeoPoint {
    GeoPoint::new(
        (origin.latitude + rng.gen_range(-0.01..0.01)).clamp(-90.0, 90.0),
        (origin.longitude + rng.gen_range(-0.01..0.01)).clamp(-180.0, 180.0),
    )
    .with_altitude(origin.altitude + rng.gen_range(-200.0..200.0))
}

#[test]
fn test_distance_symmetry_and_identity() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..500 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);

        let ab = point_distance(&a, &b).unwrap();
        let ba = point_distance(&b, &a).unwrap();
        assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0), "{a:?} {b:?}");
        assert!(ab >= 0.0);
        assert_eq!(point_distance(&a, &a).unwrap(), 0.0);
    }
}

#[test]
fn test_slope_invariants() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let a = random_point(&mut rng);
        let b = nearby_point(&mut rng, &a);

        let forward = slope(&a, &b).unwrap();
        let backward = slope(&b, &a).unwrap();

        if forward.is_vertical() {
            assert_eq!(forward.angle_degrees, 90.0);
            continue;
        }

        assert!(forward.percentage >= 0.0);
        assert!((0.0..90.0).contains(&forward.angle_degrees), "{forward:?}");
        assert!(
            (forward.percentage - backward.percentage).abs() <= 1e-9 * forward.percentage.max(1.0)
        );

        let p = random_point(&mut rng);
        assert_eq!(slope(&p, &p).unwrap(), SlopeResult::VERTICAL);
    }
}

#[test]
fn test_slope_grade_feeds_pandolf() {
    let start = GeoPoint::new(34.0522, -118.2437).with_altitude(100.0);
    let end = GeoPoint::new(34.0530, -118.2420).with_altitude(150.0);

    let grade = slope(&start, &end).unwrap().grade();
    assert!((grade - 0.277597).abs() < 1e-5);

    let request = EnergyExpenditureRequest::new(80.0)
        .with_load(20.0)
        .with_speed(1.3)
        .with_grade(grade);

    let rate = request.pandolf_rate().unwrap();
    let flat = request.with_grade(0.0).pandolf_rate().unwrap();
    let expected_extra = DEFAULT_TERRAIN_FACTOR * 100.0 * 0.35 * 1.3 * grade;
    assert!((rate - flat - expected_extra).abs() < 1e-9);
}

#[test]
fn test_vertical_slope_is_rejected_by_pandolf() {
    let point = GeoPoint::new(39.5, -119.8).with_altitude(1900.0);
    let grade = slope(&point, &point.with_altitude(1950.0)).unwrap().grade();

    assert!(matches!(
        pandolf(80.0, 20.0, 1.3, grade, DEFAULT_TERRAIN_FACTOR),
        Err(CalorieError::InvalidParameter { name: "grade", .. })
    ));
}

#[test]
fn test_ruck_in_pounds() {
    let body = pounds_to_kg(180.0);
    let ruck = pounds_to_kg(45.0);
    let weight = combined_weight_kg(body, ruck).unwrap();

    let calories = simple_calories(DEFAULT_MET, 90.0, weight).unwrap();
    let expected = (7.5 * 3.5 * 225.0 * 0.4536) / 200.0 * 90.0;
    assert!((calories - expected).abs() < 1e-9 * expected);
}

#[test]
fn test_configured_defaults_drive_request() {
    let defaults = EnergyDefaults::from_json_str(r#"{"terrain_factor": 2.1, "met": 7.0}"#).unwrap();
    let request = EnergyExpenditureRequest::new(75.0)
        .with_load(25.0)
        .with_minutes(60.0)
        .with_speed(1.2)
        .with_met(defaults.met)
        .with_terrain_factor(defaults.terrain_factor);

    assert_eq!(
        request.pandolf_rate().unwrap(),
        pandolf(75.0, 25.0, 1.2, 0.0, Terrain::LooseSand.factor()).unwrap()
    );
    assert_eq!(
        request.simple_calories().unwrap(),
        simple_calories(Met::BACKPACKING, 60.0, 100.0).unwrap()
    );
}

#[test]
fn test_logging_does_not_change_results() {
    let a = GeoPoint::new(40.0150, -105.2705).with_altitude(1650.0);
    let b = GeoPoint::new(40.0160, -105.2695).with_altitude(1660.0);

    let run = || {
        let grade = slope(&a, &b).unwrap();
        let rate = pandolf(80.0, 20.0, 1.3, grade.grade(), 1.2).unwrap();
        let total = simple_calories(7.5, 30.0, 100.0).unwrap();
        (grade, rate, total)
    };

    let quiet = run();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("calories=trace"))
        .with_test_writer()
        .finish();
    let traced = tracing::subscriber::with_default(subscriber, run);

    assert_eq!(quiet, traced);
}
