use axis_rs::core::round_to_nice_grid;

#[test]
fn non_positive_inputs_snap_to_zero() {
    assert_eq!(round_to_nice_grid(0.0, 4), 0.0);
    assert_eq!(round_to_nice_grid(-3.0, 4), 0.0);
    assert_eq!(round_to_nice_grid(-0.001, 1), 0.0);
}

#[test]
fn quarter_decade_multiples_are_fixed_points() {
    assert_eq!(round_to_nice_grid(5.0, 4), 5.0);
    assert_eq!(round_to_nice_grid(7.0, 4), 7.0);
    assert_eq!(round_to_nice_grid(9.0, 4), 9.0);
    assert_eq!(round_to_nice_grid(20.0, 4), 20.0);
    assert_eq!(round_to_nice_grid(100.0, 4), 100.0);
}

#[test]
fn values_between_grid_points_snap_upward() {
    assert_eq!(round_to_nice_grid(12.0, 4), 20.0);
    assert_eq!(round_to_nice_grid(11.0, 4), 20.0);
    assert_eq!(round_to_nice_grid(101.0, 4), 200.0);
}

#[test]
fn quarter_steps_snap_to_the_grid_step_multiple() {
    // 7 is 28 quarter steps; 28 is not a multiple of 3, so it rises to 30.
    assert_eq!(round_to_nice_grid(7.0, 3), 7.5);
}

#[test]
fn grid_step_one_keeps_the_raw_quarter_step() {
    assert_eq!(round_to_nice_grid(12.0, 1), 12.5);
}

#[test]
fn result_never_falls_below_the_input() {
    for value in [1.0, 2.0, 3.0, 7.0, 13.0, 26.0, 55.0, 99.0, 480.0] {
        let snapped = round_to_nice_grid(value, 4);
        assert!(snapped >= value, "{snapped} < {value}");
    }
}
