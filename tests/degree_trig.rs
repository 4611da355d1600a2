//! Integration tests for the degree-based trigonometry surface.

use approx::assert_abs_diff_eq;
use circstat::{arcsind, arctan2d, arctand, cosd, sind, tand};
use ndarray::{arr1, arr2, aview0};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wraps an angle into (-90, 90], the principal branch of arctand.
fn wrap_half_turn(angle_deg: f64) -> f64 {
    angle_deg - 180.0 * (angle_deg / 180.0).round()
}

#[test]
fn sind_cosd_tand_agree_on_known_angles() {
    let angles = arr1(&[0.0, 30.0, 45.0, 60.0, 90.0]);
    let sines = sind(&angles);
    let cosines = cosd(&angles);
    let tangents = tand(&angles);

    assert_abs_diff_eq!(sines[1], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(cosines[3], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(tangents[2], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sines[4], 1.0, epsilon = 1e-12);
    // tan(90°) is not a pole in floating point, just very large
    assert!(tangents[4].abs() > 1e15);
}

#[test]
fn trig_preserves_two_dimensional_shape() {
    let angles = arr2(&[[0.0, 90.0, 180.0], [270.0, 360.0, 450.0]]);
    let sines = sind(&angles);
    assert_eq!(sines.shape(), &[2, 3]);
    assert_abs_diff_eq!(sines[[1, 2]], 1.0, epsilon = 1e-12);
}

#[test]
fn arcsind_is_nan_outside_unit_interval() {
    let values = arr1(&[-1.0, 0.0, 1.0, 1.5, -2.0]);
    let angles = arcsind(&values);
    assert_abs_diff_eq!(angles[0], -90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(angles[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(angles[2], 90.0, epsilon = 1e-12);
    assert!(angles[3].is_nan());
    assert!(angles[4].is_nan());
}

#[test]
fn arctand_inverts_tand_up_to_periodicity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        // stay away from the poles at odd multiples of 90°
        let base: f64 = rng.random_range(-85.0..85.0);
        let turns: i32 = rng.random_range(-3..=3);
        let angle = base + 180.0 * f64::from(turns);

        let recovered = arctand(&tand(&aview0(&angle)));
        let expected = wrap_half_turn(angle);
        assert_abs_diff_eq!(recovered[()], expected, epsilon = 1e-9);
    }
}

#[test]
fn arctan2d_quadrant_boundaries_are_exact() {
    let east = arctan2d(&aview0(&0.0), &aview0(&1.0)).unwrap();
    assert_eq!(east[()], 0.0);

    let west = arctan2d(&aview0(&0.0), &aview0(&-1.0)).unwrap();
    assert_eq!(west[()], 180.0);

    let north = arctan2d(&aview0(&1.0), &aview0(&0.0)).unwrap();
    assert_eq!(north[()], 90.0);

    let south = arctan2d(&aview0(&-1.0), &aview0(&0.0)).unwrap();
    assert_eq!(south[()], -90.0);
}

#[test]
fn arctan2d_broadcasts_scalar_against_array() {
    let ones = arr1(&[1.0, 1.0, 1.0, 1.0]);
    let xs = arr1(&[1.0, 0.0, -1.0, 1.0]);
    let against_scalar = arctan2d(&ones, &aview0(&1.0)).unwrap();
    assert_eq!(against_scalar.shape(), &[4]);
    for &angle in against_scalar.iter() {
        assert_abs_diff_eq!(angle, 45.0, epsilon = 1e-12);
    }

    let elementwise = arctan2d(&ones, &xs).unwrap();
    assert_abs_diff_eq!(elementwise[1], 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(elementwise[2], 135.0, epsilon = 1e-12);
}

#[test]
fn arctan2d_broadcasts_column_against_row() {
    let column = arr2(&[[1.0], [-1.0]]);
    let row = arr2(&[[1.0, -1.0]]);
    let angles = arctan2d(&column, &row).unwrap();
    assert_eq!(angles.shape(), &[2, 2]);
    assert_abs_diff_eq!(angles[[0, 0]], 45.0, epsilon = 1e-12);
    assert_abs_diff_eq!(angles[[0, 1]], 135.0, epsilon = 1e-12);
    assert_abs_diff_eq!(angles[[1, 0]], -45.0, epsilon = 1e-12);
    assert_abs_diff_eq!(angles[[1, 1]], -135.0, epsilon = 1e-12);
}

#[test]
fn arctan2d_rejects_incompatible_shapes() {
    let lhs = arr1(&[1.0, 2.0, 3.0]);
    let rhs = arr1(&[1.0, 2.0]);
    assert!(arctan2d(&lhs, &rhs).is_err());
}
