use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::ChartType;

use super::{ContainerSize, FrameHandle, FrameScheduler, LayoutHost};

/// Legend height assumed when the legend measures 0.
pub const MIN_LEGEND_HEIGHT: f64 = 32.0;
/// Container height used when the container is not taller than the legend.
pub const DEFAULT_PLOT_HEIGHT: f64 = 350.0;
/// Nominal chart width when the caller gives none.
pub const DEFAULT_WIDTH: f64 = 600.0;
/// Nominal chart height when the caller gives none.
pub const DEFAULT_HEIGHT: f64 = 350.0;

pub type RerenderCallback = Box<dyn FnMut(bool)>;

/// Why a measurement was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitTrigger {
    Mount,
    /// Explicit width or height changed.
    PropsChanged,
    /// A render pass with an external container.
    Render,
}

/// A scheduled, not yet fired, measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureTask {
    pub handle: FrameHandle,
    pub trigger: FitTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitSkipReason {
    /// The frame was cancelled or already handled.
    UnknownTask,
    Unmounted,
    ContainerMissing,
    LegendMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FitOutcome {
    Skipped(FitSkipReason),
    Unchanged,
    Resized {
        size: ContainerSize,
        rerender_requested: bool,
    },
}

/// Caller-provided explicit dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeProps {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// Tracks the plot size of one chart and keeps it in sync with its host.
pub struct ContainerFitController {
    chart_type: ChartType,
    size: ContainerSize,
    props: SizeProps,
    pending: Vec<MeasureTask>,
    lifecycle: Lifecycle,
    on_rerender: Option<RerenderCallback>,
}

impl std::fmt::Debug for ContainerFitController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerFitController")
            .field("chart_type", &self.chart_type)
            .field("size", &self.size)
            .field("props", &self.props)
            .field("pending", &self.pending)
            .field("lifecycle", &self.lifecycle)
            .field("on_rerender", &self.on_rerender.is_some())
            .finish()
    }
}

impl ContainerFitController {
    #[must_use]
    pub fn new(chart_type: ChartType, props: SizeProps) -> Self {
        Self {
            chart_type,
            size: ContainerSize::default(),
            props,
            pending: Vec::new(),
            lifecycle: Lifecycle::Created,
            on_rerender: None,
        }
    }

    /// Callback told that an area chart must lay itself out again after a
    /// size change caused by new explicit dimensions.
    #[must_use]
    pub fn with_rerender_callback(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_rerender = Some(Box::new(callback));
        self
    }

    pub fn set_rerender_callback(&mut self, callback: Option<RerenderCallback>) {
        self.on_rerender = callback;
    }

    /// Chart type used by the rerender rule of later measurements.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Current plot size; `0 x 0` until the first measurement lands.
    #[must_use]
    pub fn container_size(&self) -> ContainerSize {
        self.size
    }

    /// Explicit dimensions, defaulting to 600 x 350.
    #[must_use]
    pub fn nominal_size(&self) -> ContainerSize {
        ContainerSize::new(
            self.props.width.unwrap_or(DEFAULT_WIDTH),
            self.props.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    #[must_use]
    pub fn pending_tasks(&self) -> &[MeasureTask] {
        &self.pending
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    fn schedule(
        &mut self,
        trigger: FitTrigger,
        scheduler: &mut dyn FrameScheduler,
    ) -> Option<FrameHandle> {
        if self.lifecycle == Lifecycle::Unmounted {
            trace!(?trigger, "ignoring measurement request after unmount");
            return None;
        }
        let handle = scheduler.request_frame();
        self.pending.push(MeasureTask { handle, trigger });
        trace!(?trigger, handle = handle.0, "scheduled container measurement");
        Some(handle)
    }

    pub fn mount(&mut self, scheduler: &mut dyn FrameScheduler) -> Option<FrameHandle> {
        if self.lifecycle == Lifecycle::Created {
            self.lifecycle = Lifecycle::Mounted;
        }
        self.schedule(FitTrigger::Mount, scheduler)
    }

    /// Schedules a measurement when the explicit width or height changed.
    pub fn props_changed(
        &mut self,
        next: SizeProps,
        scheduler: &mut dyn FrameScheduler,
    ) -> Option<FrameHandle> {
        let previous = std::mem::replace(&mut self.props, next);
        if previous.width == next.width && previous.height == next.height {
            return None;
        }
        self.schedule(FitTrigger::PropsChanged, scheduler)
    }

    /// Schedules a measurement at the start of a render pass when the chart is
    /// hosted inside an external container.
    pub fn before_render(
        &mut self,
        has_external_container: bool,
        scheduler: &mut dyn FrameScheduler,
    ) -> Option<FrameHandle> {
        if !has_external_container {
            return None;
        }
        self.schedule(FitTrigger::Render, scheduler)
    }

    /// Runs the measurement for a fired frame.
    ///
    /// The legend occupies its measured height (or [`MIN_LEGEND_HEIGHT`])
    /// plus vertical margins. The container contributes its full height when
    /// taller than the legend, [`DEFAULT_PLOT_HEIGHT`] otherwise; the plot
    /// gets that height minus the legend. Frames are applied in whatever
    /// order they fire; the last one wins.
    pub fn on_frame(&mut self, handle: FrameHandle, host: &dyn LayoutHost) -> FitOutcome {
        let Some(index) = self.pending.iter().position(|task| task.handle == handle) else {
            return FitOutcome::Skipped(FitSkipReason::UnknownTask);
        };
        let task = self.pending.remove(index);

        if self.lifecycle == Lifecycle::Unmounted {
            return FitOutcome::Skipped(FitSkipReason::Unmounted);
        }
        let Some(legend) = host.legend_box() else {
            debug!(handle = handle.0, "legend not attached, skipping measurement");
            return FitOutcome::Skipped(FitSkipReason::LegendMissing);
        };
        let Some(container) = host.container_box() else {
            debug!(handle = handle.0, "container not attached, skipping measurement");
            return FitOutcome::Skipped(FitSkipReason::ContainerMissing);
        };

        let legend_box_height = if legend.height > 0.0 {
            legend.height
        } else {
            MIN_LEGEND_HEIGHT
        };
        let legend_height = legend_box_height + legend.margin_top + legend.margin_bottom;
        let container_height = if container.height > legend_height {
            container.height
        } else {
            DEFAULT_PLOT_HEIGHT
        };
        let next = ContainerSize::new(container.width, container_height - legend_height);

        if next == self.size {
            trace!(handle = handle.0, "container size unchanged");
            return FitOutcome::Unchanged;
        }

        debug!(
            width = next.width,
            height = next.height,
            trigger = ?task.trigger,
            "container resized"
        );
        self.size = next;

        let rerender_requested =
            task.trigger == FitTrigger::PropsChanged && self.chart_type == ChartType::AreaChart;
        if rerender_requested {
            if let Some(callback) = self.on_rerender.as_mut() {
                callback(true);
            }
        }

        FitOutcome::Resized {
            size: next,
            rerender_requested,
        }
    }

    /// Cancels every pending measurement and ignores later frames.
    pub fn unmount(&mut self, scheduler: &mut dyn FrameScheduler) {
        for task in self.pending.drain(..) {
            scheduler.cancel_frame(task.handle);
        }
        self.lifecycle = Lifecycle::Unmounted;
        trace!("container fit controller unmounted");
    }
}
