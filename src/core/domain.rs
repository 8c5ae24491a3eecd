use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::unix_millis_to_datetime;
use crate::core::{ChartType, Margins, Series, XValue};
use crate::error::{ChartError, ChartResult};

/// Extra right-hand inset applied in right-to-left layouts, where the value
/// axis and its labels move to the right edge.
pub const RTL_EXTRA_MARGIN_RIGHT: f64 = 20.0;

/// Horizontal data domain paired with its pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub domain_start: XValue,
    pub domain_end: XValue,
    pub range_start: f64,
    pub range_end: f64,
}

impl DomainRange {
    /// Fallback used when there is nothing to plot.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            domain_start: XValue::Number(0.0),
            domain_end: XValue::Number(0.0),
            range_start: 0.0,
            range_end: 0.0,
        }
    }

    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        (self.domain_start.normalized(), self.domain_end.normalized())
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }
}

/// Computes the x domain (numeric or date) and its pixel range.
///
/// The domain spans the smallest and largest x across every series. The
/// range runs from the left margin to the right margin, less
/// [`RTL_EXTRA_MARGIN_RIGHT`] when `is_rtl`. Right-to-left layouts swap the
/// domain ends so the axis reads backwards while the range stays ascending.
pub fn compute_domain_range(
    series: &[Series],
    margins: Margins,
    container_width: f64,
    chart_type: ChartType,
    is_date_axis: bool,
    is_rtl: bool,
) -> ChartResult<DomainRange> {
    if !chart_type.has_continuous_x_axis() {
        return Err(ChartError::UnsupportedChartType {
            chart_type,
            operation: "x domain computation",
        });
    }

    let mut bounds: Option<(f64, f64)> = None;
    for point in series.iter().flat_map(|entry| entry.data.iter()) {
        let value = point.x.normalized();
        if !value.is_finite() {
            return Err(ChartError::InvalidData("x values must be finite".to_owned()));
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((low, high)) => (low.min(value), high.max(value)),
        });
    }

    let Some((min, max)) = bounds else {
        trace!("no points, using zero domain");
        return Ok(DomainRange::zero());
    };

    let (low, high) = if is_date_axis {
        (
            XValue::Date(unix_millis_to_datetime(min)?),
            XValue::Date(unix_millis_to_datetime(max)?),
        )
    } else {
        (XValue::Number(min), XValue::Number(max))
    };

    let range_start = margins.left;
    let range_end = container_width
        - margins.right
        - if is_rtl { RTL_EXTRA_MARGIN_RIGHT } else { 0.0 };

    let (domain_start, domain_end) = if is_rtl { (high, low) } else { (low, high) };
    Ok(DomainRange {
        domain_start,
        domain_end,
        range_start,
        range_end,
    })
}

/// Reports whether the x axis should be a date axis.
///
/// The first point of the last non-empty series decides.
#[must_use]
pub fn detect_date_axis(series: &[Series]) -> bool {
    series
        .iter()
        .rev()
        .find_map(|entry| entry.data.first())
        .is_some_and(|point| point.x.is_date())
}

/// Smallest and largest y across every series, or `(0, 0)` without points.
pub fn y_min_max(series: &[Series], chart_type: ChartType) -> ChartResult<(f64, f64)> {
    if !chart_type.has_continuous_x_axis() {
        return Err(ChartError::UnsupportedChartType {
            chart_type,
            operation: "y extent computation",
        });
    }

    let mut bounds: Option<(f64, f64)> = None;
    for point in series.iter().flat_map(|entry| entry.data.iter()) {
        if !point.y.is_finite() {
            return Err(ChartError::InvalidData("y values must be finite".to_owned()));
        }
        bounds = Some(match bounds {
            None => (point.y, point.y),
            Some((low, high)) => (low.min(point.y), high.max(point.y)),
        });
    }
    Ok(bounds.unwrap_or((0.0, 0.0)))
}

/// Final y bounds before tick stepping.
///
/// The upper bound is the larger of `declared_max` and the observed maximum
/// (`processed_max` when the chart supplies one, the data maximum otherwise).
/// The lower bound is 0 unless `declared_min` is negative and at or below the
/// data minimum.
#[must_use]
pub fn resolve_y_bounds(
    data_extent: (f64, f64),
    declared_min: f64,
    declared_max: f64,
    processed_max: Option<f64>,
) -> (f64, f64) {
    let observed_max = processed_max.unwrap_or(data_extent.1);
    let max = if observed_max > declared_max {
        observed_max
    } else {
        declared_max
    };
    let min = if declared_min < 0.0 && declared_min <= data_extent.0 {
        declared_min
    } else {
        0.0
    };
    (min, max)
}
