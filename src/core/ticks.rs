//! Numeric tick generation.
//!
//! Two families live here: the fixed stepping used by value axes, which
//! always lands on whole-number steps starting at the axis minimum, and the
//! 1/2/5 × 10ⁿ "nice" ticks used by continuous x axes.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_NICE_TICKS: f64 = 10_000.0;

/// Computes evenly spaced value-axis ticks from `min_value` up to (at least)
/// `max_value`.
///
/// The step is `ceil((max - min) / tick_count)`. The sequence starts at
/// `min_value` and keeps adding the step until a value reaches or exceeds
/// `max_value`. Degenerate inputs (`tick_count == 0`, `max <= min`,
/// non-finite bounds) produce `[min_value]`.
#[must_use]
pub fn compute_tick_steps(max_value: f64, min_value: f64, tick_count: usize) -> Vec<f64> {
    if tick_count == 0
        || !max_value.is_finite()
        || !min_value.is_finite()
        || max_value <= min_value
    {
        return vec![min_value];
    }

    let step = ((max_value - min_value) / tick_count as f64).ceil();
    if !step.is_finite() || step <= 0.0 {
        return vec![min_value];
    }

    let mut ticks = Vec::with_capacity(tick_count + 2);
    ticks.push(min_value);
    let mut current = min_value;
    // `tick_count` steps reach `max_value` exactly in real arithmetic; the
    // extra iteration absorbs rounding.
    for _ in 0..=tick_count {
        if current >= max_value {
            break;
        }
        let next = current + step;
        if next <= current {
            break;
        }
        current = next;
        ticks.push(current);
    }
    ticks
}

/// Returns the "nice" tick increment for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself. Negative results encode a step of
/// `-1 / result`, which keeps sub-unit steps exact (`-10` means `0.1`).
/// Returns `0.0` when no increment exists.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let step = (stop - start) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -10_f64.powf(-power) / factor
    }
}

/// Absolute tick step for `count` ticks over the given bounds, in either order.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (low, high) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let increment = tick_increment(low, high, count);
    if increment < 0.0 {
        -1.0 / increment
    } else {
        increment
    }
}

/// Generates roughly `count` round tick values inside `[start, stop]`.
///
/// Ticks are returned in the direction of the input bounds.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };

    let increment = tick_increment(low, high, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = if increment > 0.0 {
        let first = (low / increment).ceil();
        let last = (high / increment).floor();
        let n = (last - first + 1.0).clamp(0.0, MAX_NICE_TICKS) as usize;
        (0..n).map(|i| (first + i as f64) * increment).collect()
    } else {
        let inverse = -increment;
        let first = (low * inverse).ceil();
        let last = (high * inverse).floor();
        let n = (last - first + 1.0).clamp(0.0, MAX_NICE_TICKS) as usize;
        (0..n).map(|i| (first + i as f64) / inverse).collect()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Extends `[start, stop]` outward so both ends land on round tick values.
///
/// The direction of the input bounds is preserved.
#[must_use]
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut low, mut high) = if reverse { (stop, start) } else { (start, stop) };

    let mut increment = tick_increment(low, high, count);
    if increment > 0.0 {
        low = (low / increment).floor() * increment;
        high = (high / increment).ceil() * increment;
        increment = tick_increment(low, high, count);
    } else if increment < 0.0 {
        low = (low * increment).ceil() / increment;
        high = (high * increment).floor() / increment;
        increment = tick_increment(low, high, count);
    }

    if increment > 0.0 {
        low = (low / increment).floor() * increment;
        high = (high / increment).ceil() * increment;
    } else if increment < 0.0 {
        low = (low * increment).ceil() / increment;
        high = (high * increment).floor() / increment;
    }

    if reverse { (high, low) } else { (low, high) }
}
