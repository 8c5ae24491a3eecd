use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::unix_millis_to_datetime;
use crate::core::{
    DatePattern, DomainRange, LinearScale, TimeScale, XScale, XValue, format_date_tick,
};
use crate::error::ChartResult;

use super::{AxisDescription, AxisOrientation, AxisTick, DEFAULT_TICK_SIZE_OUTER};

/// Inputs shared by numeric and date x axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XAxisParams {
    pub domain_range: DomainRange,
    #[serde(default = "default_x_tick_count")]
    pub tick_count: usize,
    /// Snap the numeric domain outward to round tick values.
    #[serde(default)]
    pub round_off_ticks: bool,
    #[serde(default = "default_x_tick_size")]
    pub tick_size: f64,
    #[serde(default = "default_x_tick_padding")]
    pub tick_padding: f64,
}

fn default_x_tick_count() -> usize {
    10
}

fn default_x_tick_size() -> f64 {
    10.0
}

fn default_x_tick_padding() -> f64 {
    10.0
}

impl XAxisParams {
    #[must_use]
    pub fn new(domain_range: DomainRange) -> Self {
        Self {
            domain_range,
            tick_count: default_x_tick_count(),
            round_off_ticks: false,
            tick_size: default_x_tick_size(),
            tick_padding: default_x_tick_padding(),
        }
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_round_off_ticks(mut self, round_off_ticks: bool) -> Self {
        self.round_off_ticks = round_off_ticks;
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64, tick_padding: f64) -> Self {
        self.tick_size = tick_size;
        self.tick_padding = tick_padding;
        self
    }
}

/// Caller overrides for date-axis ticks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickParams {
    /// Explicit tick positions; replaces generated calendar ticks.
    #[serde(default)]
    pub tick_values: Option<Vec<XValue>>,
    /// Label pattern; replaces the multi-granularity default.
    #[serde(default)]
    pub tick_format: Option<DatePattern>,
}

/// A built horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxis {
    pub scale: XScale,
    pub axis: AxisDescription,
}

/// Builds a linear x axis over a numeric domain.
///
/// Ticks are round values (`1/2/5 × 10ⁿ`) labelled with comma grouping and
/// just enough decimals for the step. The outer tick size is 0.
pub fn build_numeric_x_axis(params: &XAxisParams) -> ChartResult<XAxis> {
    let mut scale = LinearScale::new(
        params.domain_range.domain_millis(),
        params.domain_range.range(),
    )?;
    if params.round_off_ticks {
        scale = scale.nice(params.tick_count);
    }

    let ticks = scale
        .ticks(params.tick_count)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                value,
                position: scale.domain_to_pixel(value)?,
                label: scale.tick_label(value, params.tick_count),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    trace!(tick_count = ticks.len(), "built numeric x axis");

    Ok(XAxis {
        scale: XScale::Numeric(scale),
        axis: AxisDescription {
            orientation: AxisOrientation::Bottom,
            ticks,
            tick_size_inner: params.tick_size,
            tick_size_outer: 0.0,
            tick_padding: params.tick_padding,
            range: scale.range(),
        },
    })
}

/// Builds a time x axis over a date domain.
///
/// Explicit `tick_values` and `tick_format` in `tick_params` take precedence
/// over generated calendar ticks and the default label format.
pub fn build_date_x_axis(params: &XAxisParams, tick_params: &TickParams) -> ChartResult<XAxis> {
    let scale = TimeScale::from_millis(
        params.domain_range.domain_millis(),
        params.domain_range.range(),
    )?;

    let tick_times = match &tick_params.tick_values {
        Some(values) => values
            .iter()
            .map(|value| unix_millis_to_datetime(value.normalized()))
            .collect::<ChartResult<Vec<_>>>()?,
        None => scale.ticks(params.tick_count)?,
    };

    let ticks = tick_times
        .into_iter()
        .map(|time| {
            let label = match &tick_params.tick_format {
                Some(pattern) => pattern.format(time),
                None => format_date_tick(time),
            };
            Ok(AxisTick {
                value: time.timestamp_millis() as f64,
                position: scale.time_to_pixel(time)?,
                label,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    trace!(tick_count = ticks.len(), "built date x axis");

    Ok(XAxis {
        scale: XScale::Time(scale),
        axis: AxisDescription {
            orientation: AxisOrientation::Bottom,
            ticks,
            tick_size_inner: params.tick_size,
            tick_size_outer: DEFAULT_TICK_SIZE_OUTER,
            tick_padding: params.tick_padding,
            range: scale.range(),
        },
    })
}
