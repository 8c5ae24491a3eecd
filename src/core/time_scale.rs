use chrono::{DateTime, Utc};

use crate::core::LinearScale;
use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::time_ticks::time_ticks;
use crate::error::ChartResult;

/// Calendar time axis mapping UTC dates onto a pixel range.
///
/// Internally the domain is milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> ChartResult<Self> {
        Self::from_millis(
            (
                datetime_to_unix_millis(domain.0),
                datetime_to_unix_millis(domain.1),
            ),
            range,
        )
    }

    pub fn from_millis(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    /// Domain bounds as UTC dates.
    pub fn domain(self) -> ChartResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = self.linear.domain();
        Ok((unix_millis_to_datetime(start)?, unix_millis_to_datetime(end)?))
    }

    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn time_to_pixel(self, time: DateTime<Utc>) -> ChartResult<f64> {
        self.linear.domain_to_pixel(datetime_to_unix_millis(time))
    }

    pub fn millis_to_pixel(self, millis: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(millis)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        unix_millis_to_datetime(self.linear.pixel_to_domain(pixel)?)
    }

    /// Calendar-aligned ticks inside the domain, in domain order.
    pub fn ticks(self, count: usize) -> ChartResult<Vec<DateTime<Utc>>> {
        let (start, end) = self.domain()?;
        Ok(time_ticks(start, end, count))
    }
}
