use cartesian_rs::core::{compute_tick_steps, nice_domain, nice_ticks};

#[test]
fn tick_steps_round_step_up_and_overshoot_max() {
    let ticks = compute_tick_steps(95.0, 0.0, 4);
    assert_eq!(ticks, vec![0.0, 24.0, 48.0, 72.0, 96.0]);
}

#[test]
fn tick_steps_land_exactly_on_max_when_divisible() {
    let ticks = compute_tick_steps(100.0, 0.0, 4);
    assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn tick_steps_start_at_negative_minimum() {
    let ticks = compute_tick_steps(30.0, -10.0, 4);
    assert_eq!(ticks, vec![-10.0, 0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn tick_steps_use_whole_number_steps_for_small_spans() {
    let ticks = compute_tick_steps(1.5, 0.0, 4);
    assert_eq!(ticks, vec![0.0, 1.0, 2.0]);
}

#[test]
fn degenerate_tick_step_inputs_return_minimum_only() {
    assert_eq!(compute_tick_steps(0.0, 0.0, 4), vec![0.0]);
    assert_eq!(compute_tick_steps(5.0, 10.0, 4), vec![10.0]);
    assert_eq!(compute_tick_steps(95.0, 0.0, 0), vec![0.0]);
    assert_eq!(compute_tick_steps(f64::NAN, 0.0, 4), vec![0.0]);
}

#[test]
fn nice_ticks_pick_round_values_inside_bounds() {
    let ticks = nice_ticks(3.0, 97.0, 10);
    assert_eq!(ticks.first().copied(), Some(10.0));
    assert_eq!(ticks.last().copied(), Some(90.0));
    assert_eq!(ticks.len(), 9);
}

#[test]
fn nice_domain_extends_to_round_bounds() {
    assert_eq!(nice_domain(3.0, 97.0, 10), (0.0, 100.0));
    assert_eq!(nice_domain(97.0, 3.0, 10), (100.0, 0.0));
}
