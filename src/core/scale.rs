use crate::core::format::{format_grouped_fixed, precision_for_step, precision_for_value};
use crate::core::ticks::{nice_domain, nice_ticks, tick_step};
use crate::core::{TimeScale, XValue};
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain to a pixel range.
///
/// Either pair may be reversed. A zero-width domain maps every value to the
/// middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy whose domain is extended to round tick boundaries.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (domain_start, domain_end) = nice_domain(self.domain_start, self.domain_end, count);
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok((self.range_start + self.range_end) / 2.0);
        }
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Ok((self.domain_start + self.domain_end) / 2.0);
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Label for a tick produced by [`Self::ticks`] with the same `count`.
    ///
    /// A zero-width domain has no step; its single tick keeps every decimal.
    #[must_use]
    pub fn tick_label(self, value: f64, count: usize) -> String {
        let step = tick_step(self.domain_start, self.domain_end, count);
        let decimals = if step.is_finite() && step > 0.0 {
            precision_for_step(step)
        } else {
            precision_for_value(value)
        };
        format_grouped_fixed(value, decimals)
    }
}

/// Scale used by the horizontal axis: numeric or calendar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XScale {
    Numeric(LinearScale),
    Time(TimeScale),
}

impl XScale {
    pub fn x_to_pixel(self, x: XValue) -> ChartResult<f64> {
        match self {
            Self::Numeric(scale) => scale.domain_to_pixel(x.normalized()),
            Self::Time(scale) => scale.millis_to_pixel(x.normalized()),
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Numeric(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
        }
    }

    #[must_use]
    pub fn is_time(self) -> bool {
        matches!(self, Self::Time(_))
    }
}
