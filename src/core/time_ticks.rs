//! Calendar-aligned tick generation for date axes.
//!
//! Ticks are aligned in UTC. An interval is chosen from a fixed ladder
//! (seconds through years) so that roughly `count` ticks cover the domain,
//! then every interval boundary inside the domain becomes a tick.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

use crate::core::ticks::tick_step;

const DURATION_SECOND: f64 = 1_000.0;
const DURATION_MINUTE: f64 = DURATION_SECOND * 60.0;
const DURATION_HOUR: f64 = DURATION_MINUTE * 60.0;
const DURATION_DAY: f64 = DURATION_HOUR * 24.0;
const DURATION_WEEK: f64 = DURATION_DAY * 7.0;
const DURATION_MONTH: f64 = DURATION_DAY * 30.0;
const DURATION_YEAR: f64 = DURATION_DAY * 365.0;

const MAX_ITERATIONS: usize = 100_000;

/// Calendar unit of a time tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A calendar unit repeated `step` times, e.g. every 15 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: u32,
}

const TICK_INTERVALS: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, DURATION_SECOND),
    (TimeUnit::Second, 5, 5.0 * DURATION_SECOND),
    (TimeUnit::Second, 15, 15.0 * DURATION_SECOND),
    (TimeUnit::Second, 30, 30.0 * DURATION_SECOND),
    (TimeUnit::Minute, 1, DURATION_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * DURATION_MINUTE),
    (TimeUnit::Hour, 1, DURATION_HOUR),
    (TimeUnit::Hour, 3, 3.0 * DURATION_HOUR),
    (TimeUnit::Hour, 6, 6.0 * DURATION_HOUR),
    (TimeUnit::Hour, 12, 12.0 * DURATION_HOUR),
    (TimeUnit::Day, 1, DURATION_DAY),
    (TimeUnit::Day, 2, 2.0 * DURATION_DAY),
    (TimeUnit::Week, 1, DURATION_WEEK),
    (TimeUnit::Month, 1, DURATION_MONTH),
    (TimeUnit::Month, 3, 3.0 * DURATION_MONTH),
    (TimeUnit::Year, 1, DURATION_YEAR),
];

impl TimeInterval {
    #[must_use]
    pub const fn new(unit: TimeUnit, step: u32) -> Self {
        Self { unit, step }
    }

    /// Picks the interval whose duration best matches `span / count`.
    #[must_use]
    pub fn for_span(start_ms: f64, end_ms: f64, count: usize) -> Option<Self> {
        if count == 0 || !start_ms.is_finite() || !end_ms.is_finite() {
            return None;
        }
        let target = (end_ms - start_ms).abs() / count as f64;
        let index = TICK_INTERVALS.partition_point(|(_, _, duration)| *duration <= target);

        if index == TICK_INTERVALS.len() {
            let years = tick_step(start_ms / DURATION_YEAR, end_ms / DURATION_YEAR, count);
            let step = years.max(1.0).min(f64::from(u32::MAX)) as u32;
            return Some(Self::new(TimeUnit::Year, step));
        }
        if index == 0 {
            let millis = tick_step(start_ms, end_ms, count).max(1.0);
            let step = millis.min(f64::from(u32::MAX)) as u32;
            return Some(Self::new(TimeUnit::Millisecond, step));
        }

        let (lower_unit, lower_step, lower_duration) = TICK_INTERVALS[index - 1];
        let (upper_unit, upper_step, upper_duration) = TICK_INTERVALS[index];
        if target / lower_duration < upper_duration / target {
            Some(Self::new(lower_unit, lower_step))
        } else {
            Some(Self::new(upper_unit, upper_step))
        }
    }

    fn unit_floor(self, time: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = time.date_naive();
        let floored = match self.unit {
            TimeUnit::Millisecond => time.with_nanosecond(time.nanosecond() / 1_000_000 * 1_000_000)?,
            TimeUnit::Second => time.with_nanosecond(0)?,
            TimeUnit::Minute => time.with_nanosecond(0)?.with_second(0)?,
            TimeUnit::Hour => time.with_nanosecond(0)?.with_second(0)?.with_minute(0)?,
            TimeUnit::Day => start_of_day(date),
            TimeUnit::Week => {
                let back = i64::from(date.weekday().num_days_from_sunday());
                start_of_day(date.checked_sub_signed(TimeDelta::days(back))?)
            }
            TimeUnit::Month => start_of_day(date.with_day(1)?),
            TimeUnit::Year => start_of_day(NaiveDate::from_ymd_opt(date.year(), 1, 1)?),
        };
        Some(floored)
    }

    fn unit_advance(self, time: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.unit {
            TimeUnit::Millisecond => time.checked_add_signed(TimeDelta::milliseconds(1)),
            TimeUnit::Second => time.checked_add_signed(TimeDelta::seconds(1)),
            TimeUnit::Minute => time.checked_add_signed(TimeDelta::minutes(1)),
            TimeUnit::Hour => time.checked_add_signed(TimeDelta::hours(1)),
            TimeUnit::Day => time.checked_add_signed(TimeDelta::days(1)),
            TimeUnit::Week => time.checked_add_signed(TimeDelta::weeks(1)),
            TimeUnit::Month => time.checked_add_months(Months::new(1)),
            TimeUnit::Year => time.checked_add_months(Months::new(12)),
        }
    }

    /// Whether `time` (already floored to the unit) is a multiple of `step`.
    fn accepts(self, time: DateTime<Utc>) -> bool {
        let step = self.step.max(1);
        if step == 1 {
            return true;
        }
        let field = match self.unit {
            TimeUnit::Millisecond => {
                return time.timestamp_millis().rem_euclid(i64::from(step)) == 0;
            }
            TimeUnit::Second => time.second(),
            TimeUnit::Minute => time.minute(),
            TimeUnit::Hour => time.hour(),
            TimeUnit::Day => time.day() - 1,
            TimeUnit::Week => 0,
            TimeUnit::Month => time.month0(),
            TimeUnit::Year => {
                return time.year().rem_euclid(step as i32) == 0;
            }
        };
        field % step == 0
    }

    /// Every interval boundary in `[start, end]`, in ascending order.
    #[must_use]
    pub fn range(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let mut ticks = Vec::new();
        let Some(mut current) = self.unit_floor(start) else {
            return ticks;
        };
        if current < start {
            match self.unit_advance(current) {
                Some(next) => current = next,
                None => return ticks,
            }
        }

        for _ in 0..MAX_ITERATIONS {
            if current > end {
                break;
            }
            if self.accepts(current) {
                ticks.push(current);
            }
            match self.unit_advance(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        ticks
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Generates calendar-aligned ticks for a date domain given in either order.
///
/// Ticks follow the direction of the input bounds.
#[must_use]
pub fn time_ticks(start: DateTime<Utc>, end: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let reverse = end < start;
    let (low, high) = if reverse { (end, start) } else { (start, end) };

    let Some(interval) =
        TimeInterval::for_span(low.timestamp_millis() as f64, high.timestamp_millis() as f64, count)
    else {
        return Vec::new();
    };

    let mut ticks = interval.range(low, high);
    if reverse {
        ticks.reverse();
    }
    ticks
}
