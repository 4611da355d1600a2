//! Integration tests for cartesian/polar conversion.

use approx::assert_abs_diff_eq;
use circstat::{cartesian_to_polar, cosd, sind};
use ndarray::{arr1, arr2, aview0, Array1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn axes_map_to_cardinal_angles() {
    let x = arr1(&[1.0, 0.0, -1.0, 0.0]);
    let y = arr1(&[0.0, 1.0, 0.0, -1.0]);
    let (radius, theta) = cartesian_to_polar(&x, &y).unwrap();

    for &r in radius.iter() {
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(theta[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(theta[1], 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(theta[2], 180.0, epsilon = 1e-12);
    assert_abs_diff_eq!(theta[3], 270.0, epsilon = 1e-12);
}

#[test]
fn theta_stays_in_the_full_turn() {
    let mut rng = StdRng::seed_from_u64(11);
    let x = Array1::from_iter((0..500).map(|_| rng.random_range(-10.0..10.0)));
    let y = Array1::from_iter((0..500).map(|_| rng.random_range(-10.0..10.0)));
    let (_, theta) = cartesian_to_polar(&x, &y).unwrap();
    for &angle in theta.iter() {
        assert!((0.0..=360.0).contains(&angle));
    }
}

#[test]
fn round_trips_through_polar_form() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..200 {
        let x = rng.random_range(-100.0..100.0);
        let y = rng.random_range(-100.0..100.0);
        let (radius, theta) = cartesian_to_polar(&aview0(&x), &aview0(&y)).unwrap();

        let x_back = radius[()] * cosd(&theta)[()];
        let y_back = radius[()] * sind(&theta)[()];
        assert_abs_diff_eq!(x_back, x, epsilon = 1e-9);
        assert_abs_diff_eq!(y_back, y, epsilon = 1e-9);
    }
}

#[test]
fn origin_maps_to_zero_radius_and_angle() {
    let (radius, theta) = cartesian_to_polar(&aview0(&0.0), &aview0(&0.0)).unwrap();
    assert_eq!(radius[()], 0.0);
    assert_eq!(theta[()], 0.0);
}

#[test]
fn broadcasts_row_against_column() {
    let column = arr2(&[[3.0], [0.0]]);
    let row = arr2(&[[4.0, 0.0]]);
    let (radius, theta) = cartesian_to_polar(&column, &row).unwrap();
    assert_eq!(radius.shape(), &[2, 2]);
    assert_abs_diff_eq!(radius[[0, 0]], 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(radius[[0, 1]], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(radius[[1, 0]], 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(theta[[1, 0]], 90.0, epsilon = 1e-12);
}
