use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use quire_units::angle::{normalize, FULL_TURN};

#[test]
fn folds_into_range() {
    assert_eq!(normalize(0.0), 0.0);
    assert_eq!(normalize(360.0), 0.0);
    assert_eq!(normalize(450.0), 90.0);
    assert_eq!(normalize(-90.0), 270.0);
    assert_eq!(normalize(-720.0), 0.0);
    assert_abs_diff_eq!(normalize(359.5), 359.5);
}

#[test]
fn negative_zero_is_positive() {
    assert!(normalize(-0.0).is_sign_positive());
}

#[test]
fn tiny_negative_does_not_reach_full_turn() {
    let v = normalize(-1e-20);
    assert!((0.0..FULL_TURN).contains(&v));
}

#[test]
fn non_finite_is_nan() {
    assert!(normalize(f64::NAN).is_nan());
    assert!(normalize(f64::INFINITY).is_nan());
}

proptest! {
    #[test]
    fn stays_in_range(x in -1e12f64..1e12) {
        let v = normalize(x);
        prop_assert!((0.0..FULL_TURN).contains(&v));
    }

    #[test]
    fn idempotent(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let once = normalize(x);
        prop_assert_eq!(normalize(once), once);
    }
}
