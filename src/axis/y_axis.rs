use tracing::trace;

use crate::core::{LinearScale, Margins, ValueFormat, compute_tick_steps, resolve_y_bounds};
use crate::error::ChartResult;

use super::{AxisDescription, AxisOrientation, AxisTick, DEFAULT_TICK_SIZE_OUTER};

/// Inputs for the value axis.
#[derive(Debug, Clone)]
pub struct YAxisParams {
    /// Smallest and largest y in the data.
    pub data_extent: (f64, f64),
    /// Maximum computed by the chart itself (stacked areas), when it differs
    /// from the raw data maximum.
    pub processed_max: Option<f64>,
    pub margins: Margins,
    pub container_width: f64,
    pub container_height: f64,
    pub tick_format: ValueFormat,
    pub tick_count: usize,
    pub declared_max: f64,
    pub declared_min: f64,
    pub tick_padding: f64,
    /// Height reserved above the plot for event annotation labels.
    pub event_label_height: Option<f64>,
}

impl YAxisParams {
    #[must_use]
    pub fn new(margins: Margins, container_width: f64, container_height: f64) -> Self {
        Self {
            data_extent: (0.0, 0.0),
            processed_max: None,
            margins,
            container_width,
            container_height,
            tick_format: ValueFormat::default(),
            tick_count: 4,
            declared_max: 0.0,
            declared_min: 0.0,
            tick_padding: 12.0,
            event_label_height: None,
        }
    }

    #[must_use]
    pub fn with_data_extent(mut self, min: f64, max: f64) -> Self {
        self.data_extent = (min, max);
        self
    }

    #[must_use]
    pub fn with_declared_bounds(mut self, min: f64, max: f64) -> Self {
        self.declared_min = min;
        self.declared_max = max;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: ValueFormat) -> Self {
        self.tick_format = tick_format;
        self
    }
}

/// A built value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxis {
    pub scale: LinearScale,
    pub axis: AxisDescription,
}

impl YAxis {
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        self.axis.ticks.iter().map(|tick| tick.value).collect()
    }
}

/// Builds the value axis.
///
/// Tick values come from [`compute_tick_steps`], so the domain always ends
/// on the last whole step at or above the maximum. Pixel range runs from
/// the bottom margin up to the top margin (plus any event label band). Tick
/// marks span the plot width to double as grid lines. In right-to-left
/// layouts the axis sits on the right.
pub fn build_y_axis(params: &YAxisParams, is_rtl: bool) -> ChartResult<YAxis> {
    let (min, max) = resolve_y_bounds(
        params.data_extent,
        params.declared_min,
        params.declared_max,
        params.processed_max,
    );
    let values = compute_tick_steps(max, min, params.tick_count);
    let top_value = values.last().copied().unwrap_or(min);

    let range_bottom = params.container_height - params.margins.bottom;
    let range_top = params.margins.top + params.event_label_height.unwrap_or(0.0);
    let scale = LinearScale::new((min, top_value), (range_bottom, range_top))?;

    let ticks = values
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                value,
                position: scale.domain_to_pixel(value)?,
                label: params.tick_format.format(value),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    trace!(min, max = top_value, tick_count = ticks.len(), "built y axis");

    let orientation = if is_rtl {
        AxisOrientation::Right
    } else {
        AxisOrientation::Left
    };

    Ok(YAxis {
        scale,
        axis: AxisDescription {
            orientation,
            ticks,
            tick_size_inner: -params.margins.inner_width(params.container_width),
            tick_size_outer: DEFAULT_TICK_SIZE_OUTER,
            tick_padding: params.tick_padding,
            range: scale.range(),
        },
    })
}
