//! Container fit.
//!
//! Plot dimensions follow the hosting element. Measurement is deferred to the
//! host's next paint through a [`FrameScheduler`]; every pending measurement
//! is tracked as a [`MeasureTask`] so teardown can cancel it.

mod fit_controller;
mod scheduler;

use serde::{Deserialize, Serialize};

pub use fit_controller::{
    ContainerFitController, DEFAULT_HEIGHT, DEFAULT_PLOT_HEIGHT, DEFAULT_WIDTH, FitOutcome,
    FitSkipReason, FitTrigger, MIN_LEGEND_HEIGHT, MeasureTask, RerenderCallback, SizeProps,
};
pub use scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};

/// Measured box of a host element, including its vertical margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBox {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub margin_bottom: f64,
}

impl ElementBox {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    #[must_use]
    pub const fn with_vertical_margins(mut self, top: f64, bottom: f64) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }
}

/// Host environment able to measure the chart container and its legend.
///
/// `None` means the element is not attached yet.
pub trait LayoutHost {
    fn container_box(&self) -> Option<ElementBox>;
    fn legend_box(&self) -> Option<ElementBox>;
}

/// Plot dimensions derived from the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
