use axis_rs::core::{AxisConfig, SeriesPoint, compute_bounds};

fn series(values: &[f64]) -> Vec<SeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| SeriesPoint::new((i + 1).to_string(), v))
        .collect()
}

#[test]
fn tight_bounds_returns_rounded_raw_extremes() {
    let points = series(&[3.0, 7.0, 2.0]);
    let bounds = compute_bounds(&points, AxisConfig::tight()).expect("bounds");

    assert_eq!(bounds.min, 2.0);
    assert_eq!(bounds.max, 7.0);
}

#[test]
fn tight_bounds_rounds_half_up() {
    let points = series(&[-2.5, 3.5]);
    let bounds = compute_bounds(&points, AxisConfig::tight()).expect("bounds");

    assert_eq!(bounds.min, -2.0);
    assert_eq!(bounds.max, 4.0);
}

#[test]
fn empty_series_degenerates_to_zero_bounds() {
    let loose = compute_bounds(&[], AxisConfig::default()).expect("loose");
    let tight = compute_bounds(&[], AxisConfig::tight()).expect("tight");

    assert_eq!((loose.min, loose.max), (0.0, 0.0));
    assert_eq!((tight.min, tight.max), (0.0, 0.0));
}

#[test]
fn non_negative_series_keeps_min_and_snaps_max() {
    let points = series(&[3.0, 7.0, 2.0]);
    let bounds = compute_bounds(&points, AxisConfig::default()).expect("bounds");

    // 7 is already a quarter-decade multiple of the default grid step.
    assert_eq!(bounds.min, 2.0);
    assert_eq!(bounds.max, 7.0);
}

#[test]
fn non_negative_series_snaps_max_upward() {
    let points = series(&[12.0]);
    let bounds = compute_bounds(&points, AxisConfig::default()).expect("bounds");

    assert_eq!(bounds.min, 12.0);
    assert_eq!(bounds.max, 20.0);
}

#[test]
fn mixed_sign_series_balances_around_zero() {
    let points = series(&[-5.0, 10.0, 20.0]);
    let bounds = compute_bounds(&points, AxisConfig::default()).expect("bounds");

    // max 20 snaps to 20, step |20 - (-5)| / 3 snaps to 9; three divisions
    // go to the positive side, one to the negative.
    assert_eq!(bounds.min, -9.0);
    assert_eq!(bounds.max, 27.0);
    assert!(bounds.straddles_zero());
}

#[test]
fn negative_dominant_series_gives_the_larger_share_below_zero() {
    let points = series(&[-20.0, 5.0]);
    let bounds = compute_bounds(&points, AxisConfig::default()).expect("bounds");

    assert_eq!(bounds.min, -27.0);
    assert_eq!(bounds.max, 9.0);
    assert!(bounds.min <= -20.0);
    assert!(bounds.max >= 5.0);
}

#[test]
fn mixed_sign_bounds_contain_the_rounded_data() {
    let points = series(&[-5.0, 10.0, 20.0]);
    let bounds = compute_bounds(&points, AxisConfig::default()).expect("bounds");

    assert!(bounds.min <= -5.0);
    assert!(bounds.max >= 20.0);
}

#[test]
fn small_grid_step_uses_the_dominant_magnitude_step() {
    let points = series(&[-3.0, 8.0]);
    let config = AxisConfig::new(2, false);
    let bounds = compute_bounds(&points, config).expect("bounds");

    assert!(bounds.min <= 0.0);
    assert!(bounds.max >= 8.0);
    assert!(bounds.min <= bounds.max);
}

#[test]
fn non_finite_value_is_rejected() {
    let points = vec![
        SeriesPoint::new("1", 1.0),
        SeriesPoint::new("2", f64::NAN),
    ];
    let result = compute_bounds(&points, AxisConfig::default());
    assert!(result.is_err());

    let points = vec![SeriesPoint::new("1", f64::INFINITY)];
    assert!(compute_bounds(&points, AxisConfig::default()).is_err());
}

#[test]
fn zero_grid_step_is_rejected() {
    let points = series(&[1.0, 2.0]);
    let result = compute_bounds(&points, AxisConfig::new(0, false));
    assert!(result.is_err());
}

#[test]
fn repeated_calls_yield_identical_bounds() {
    let points = series(&[-5.0, 10.0, 20.0]);
    let first = compute_bounds(&points, AxisConfig::default()).expect("first");
    let second = compute_bounds(&points, AxisConfig::default()).expect("second");

    assert_eq!(first, second);
}
