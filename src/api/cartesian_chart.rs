use tracing::{debug, warn};

use crate::axis::{
    XAxis, XAxisParams, YAxis, YAxisParams, build_date_x_axis, build_numeric_x_axis, build_y_axis,
};
use crate::callout::{CalloutContent, CalloutGroup, aggregate_callouts, find_callout_group};
use crate::core::{
    LinearScale, Margins, RTL_EXTRA_MARGIN_RIGHT, Series, Viewport, XScale, XValue,
    compute_domain_range, detect_date_axis, y_min_max,
};
use crate::error::{ChartError, ChartResult};
use crate::labels::{LabelWrapOptions, LabelWrapOutcome, TextMeasurer, wrap_axis_labels};
use crate::layout::{
    ContainerFitController, ContainerSize, FitOutcome, FrameHandle, FrameScheduler, LayoutHost,
};
use crate::render::{AxisStyle, RenderFrame, RenderFrameAxisSurface, Renderer};

use super::ChartConfig;

/// Distance from the bottom edge to the x axis line.
pub const X_AXIS_BAND_HEIGHT: f64 = 35.0;
/// Left offset of the y axis line in left-to-right layouts.
pub const Y_AXIS_LEFT_OFFSET: f64 = 40.0;
/// Tick padding used by the value axis inside a chart.
const CHART_Y_TICK_PADDING: f64 = 10.0;

pub type MarginsCallback = Box<dyn FnMut(&Margins)>;
pub type GraphDataCallback = Box<dyn FnMut(&GraphData)>;

/// Scales and plot size handed to the concrete chart after each render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphData {
    pub x_scale: XScale,
    pub y_scale: LinearScale,
    pub container_height: f64,
    pub container_width: f64,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    /// Where the x axis line starts, in chart pixels.
    pub x_axis_origin: (f64, f64),
    /// Where the y axis line sits, in chart pixels.
    pub y_axis_origin: (f64, f64),
}

impl ChartLayout {
    /// Wraps or truncates the x tick labels in place.
    ///
    /// Returns the outcome so the caller can reserve `extra_height` below
    /// the axis.
    pub fn wrap_x_axis_labels(
        &mut self,
        char_limit: usize,
        tooltip_enabled: bool,
        measurer: &dyn TextMeasurer,
        options: &LabelWrapOptions,
    ) -> LabelWrapOutcome {
        let labels: Vec<String> = self
            .x_axis
            .axis
            .ticks
            .iter()
            .map(|tick| tick.label.clone())
            .collect();
        let outcome = wrap_axis_labels(&labels, char_limit, tooltip_enabled, measurer, options);
        self.x_axis.axis.apply_wrapped_labels(&outcome);
        outcome
    }

    /// Lowers both axes into a frame.
    pub fn axis_frame(&self, style: AxisStyle) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        self.x_axis
            .axis
            .draw_onto(&mut RenderFrameAxisSurface::new(&mut frame, self.x_axis_origin, style))?;
        self.y_axis
            .axis
            .draw_onto(&mut RenderFrameAxisSurface::new(&mut frame, self.y_axis_origin, style))?;
        Ok(frame)
    }

    pub fn render_axes(&self, renderer: &mut dyn Renderer, style: AxisStyle) -> ChartResult<()> {
        let frame = self.axis_frame(style)?;
        renderer.render(&frame)
    }
}

/// Shared base of area and line charts: owns the configuration, keeps the
/// plot sized to its container and rebuilds scales and axes on every render
/// pass.
pub struct CartesianChart {
    config: ChartConfig,
    margins: Margins,
    fit: ContainerFitController,
    on_margins: Option<MarginsCallback>,
    on_graph_data: Option<GraphDataCallback>,
}

impl std::fmt::Debug for CartesianChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartesianChart")
            .field("config", &self.config)
            .field("margins", &self.margins)
            .field("fit", &self.fit)
            .field("on_margins", &self.on_margins.is_some())
            .field("on_graph_data", &self.on_graph_data.is_some())
            .finish()
    }
}

impl CartesianChart {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let margins = config.margins.resolve();
        let fit = ContainerFitController::new(config.chart_type, config.size_props());
        Ok(Self {
            config,
            margins,
            fit,
            on_margins: None,
            on_graph_data: None,
        })
    }

    /// Called with the resolved margins at the start of every render pass.
    #[must_use]
    pub fn with_margins_callback(mut self, callback: impl FnMut(&Margins) + 'static) -> Self {
        self.on_margins = Some(Box::new(callback));
        self
    }

    /// Called with the freshly built scales at the end of every render pass.
    #[must_use]
    pub fn with_graph_data_callback(mut self, callback: impl FnMut(&GraphData) + 'static) -> Self {
        self.on_graph_data = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn with_rerender_callback(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.fit.set_rerender_callback(Some(Box::new(callback)));
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn container_size(&self) -> ContainerSize {
        self.fit.container_size()
    }

    #[must_use]
    pub fn fit_controller(&self) -> &ContainerFitController {
        &self.fit
    }

    pub fn mount(&mut self, scheduler: &mut dyn FrameScheduler) -> Option<FrameHandle> {
        self.fit.mount(scheduler)
    }

    /// Replaces the configuration; a new explicit size schedules a
    /// measurement.
    pub fn update_config(
        &mut self,
        next: ChartConfig,
        scheduler: &mut dyn FrameScheduler,
    ) -> ChartResult<Option<FrameHandle>> {
        next.validate()?;
        if next.chart_type != self.config.chart_type {
            debug!(
                from = ?self.config.chart_type,
                to = ?next.chart_type,
                "chart type changed"
            );
        }
        self.fit.set_chart_type(next.chart_type);
        let handle = self.fit.props_changed(next.size_props(), scheduler);
        self.margins = next.margins.resolve();
        self.config = next;
        Ok(handle)
    }

    pub fn on_frame(&mut self, handle: FrameHandle, host: &dyn LayoutHost) -> FitOutcome {
        self.fit.on_frame(handle, host)
    }

    pub fn unmount(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.fit.unmount(scheduler);
    }

    /// Builds scales and axes for `series` at the current container size.
    ///
    /// The date/numeric decision comes from the config when set, from the
    /// data otherwise. Numeric x ticks are snapped to round values.
    pub fn render_pass(
        &mut self,
        series: &[Series],
        scheduler: &mut dyn FrameScheduler,
    ) -> ChartResult<ChartLayout> {
        self.fit
            .before_render(self.config.has_parent_container, scheduler);
        if let Some(callback) = self.on_margins.as_mut() {
            callback(&self.margins);
        }

        let size = self.fit.container_size();
        let is_rtl = self.config.rtl;
        let is_date_axis = self
            .config
            .is_x_axis_date
            .unwrap_or_else(|| detect_date_axis(series));

        let domain_range = compute_domain_range(
            series,
            self.margins,
            size.width,
            self.config.chart_type,
            is_date_axis,
            is_rtl,
        )
        .inspect_err(log_unsupported)?;

        let x_params = XAxisParams::new(domain_range).with_round_off_ticks(true);
        let x_axis = if is_date_axis {
            build_date_x_axis(&x_params, &self.config.tick_params)?
        } else {
            build_numeric_x_axis(&x_params)?
        };

        let (data_min, data_max) =
            y_min_max(series, self.config.chart_type).inspect_err(log_unsupported)?;
        let mut y_params = YAxisParams::new(self.margins, size.width, size.height)
            .with_data_extent(data_min, data_max)
            .with_declared_bounds(self.config.y_min_value, self.config.y_max_value)
            .with_tick_count(self.config.y_axis_tick_count)
            .with_tick_format(self.config.y_axis_tick_format.clone());
        y_params.processed_max = self.config.max_of_y;
        y_params.tick_padding = CHART_Y_TICK_PADDING;
        y_params.event_label_height = self.config.event_label_height;
        let y_axis = build_y_axis(&y_params, is_rtl)?;

        let graph_data = GraphData {
            x_scale: x_axis.scale,
            y_scale: y_axis.scale,
            container_height: size.height,
            container_width: size.width,
        };
        if let Some(callback) = self.on_graph_data.as_mut() {
            callback(&graph_data);
        }

        let y_axis_x = if is_rtl {
            size.width - self.margins.right - RTL_EXTRA_MARGIN_RIGHT
        } else {
            Y_AXIS_LEFT_OFFSET
        };
        debug!(
            width = size.width,
            height = size.height,
            is_date_axis,
            is_rtl,
            "render pass complete"
        );

        Ok(ChartLayout {
            viewport: Viewport::from_container(size.width, size.height),
            margins: self.margins,
            x_axis,
            y_axis,
            x_axis_origin: (0.0, size.height - X_AXIS_BAND_HEIGHT),
            y_axis_origin: (y_axis_x, 0.0),
        })
    }

    /// Groups every series' points by x for hover callouts.
    #[must_use]
    pub fn callout_groups(&self, series: &[Series]) -> Vec<CalloutGroup> {
        aggregate_callouts(series)
    }

    /// Callout for the hovered x, or `None` when tooltips are hidden or
    /// nothing is plotted there.
    ///
    /// Without multi-stack callouts only the hovered series is shown (the
    /// first one at `x` when `hovered_legend` is `None` or unknown).
    #[must_use]
    pub fn callout_content(
        &self,
        groups: &[CalloutGroup],
        x: XValue,
        x_label: &str,
        hovered_legend: Option<&str>,
    ) -> Option<CalloutContent> {
        if self.config.hide_tooltip {
            return None;
        }
        let group = find_callout_group(groups, x)?;
        if self.config.multi_stack_callout {
            return Some(CalloutContent::from_group(group, x_label));
        }

        let hovered = hovered_legend
            .and_then(|legend| group.values.iter().find(|value| value.legend == legend))
            .or_else(|| group.values.first())?;
        let single = CalloutGroup {
            x: group.x,
            values: vec![hovered.clone()],
        };
        Some(CalloutContent::from_group(&single, x_label))
    }
}

fn log_unsupported(error: &ChartError) {
    if let ChartError::UnsupportedChartType {
        chart_type,
        operation,
    } = error
    {
        warn!(?chart_type, operation, "chart type cannot be rendered as a cartesian chart");
    }
}
