//! Axis construction.
//!
//! Builders turn a domain/range pair plus tick configuration into a scale and
//! a pure [`AxisDescription`]. Nothing is drawn here: callers hand the
//! description to an [`AxisSurface`], which owns the drawing primitives.

mod x_axis;
mod y_axis;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::labels::LabelWrapOutcome;

pub use x_axis::{TickParams, XAxis, XAxisParams, build_date_x_axis, build_numeric_x_axis};
pub use y_axis::{YAxis, YAxisParams, build_y_axis};

/// Outer tick length used when an axis does not override it.
pub const DEFAULT_TICK_SIZE_OUTER: f64 = 6.0;

/// Side of the plot an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Direction ticks and labels extend away from the axis line: `+1` for
    /// bottom and right axes, `-1` for left axes.
    #[must_use]
    pub const fn outward_sign(self) -> f64 {
        match self {
            Self::Bottom | Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// One labeled reference mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Data value (milliseconds for date axes).
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

/// Everything needed to draw an axis, in axis-local pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescription {
    pub orientation: AxisOrientation,
    pub ticks: Vec<AxisTick>,
    /// Length of tick marks. Negative values extend across the plot, which
    /// is how value axes draw grid lines.
    pub tick_size_inner: f64,
    /// Length of the end caps of the domain path.
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Pixel extent of the axis line.
    pub range: (f64, f64),
}

impl AxisDescription {
    /// Distance from the axis line to the label anchor.
    #[must_use]
    pub fn label_offset(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }

    /// Replaces tick labels with wrapped or truncated ones, in tick order.
    ///
    /// Wrapped lines are joined with `\n`; surfaces draw one line each.
    pub fn apply_wrapped_labels(&mut self, outcome: &LabelWrapOutcome) {
        for (tick, wrapped) in self.ticks.iter_mut().zip(&outcome.labels) {
            tick.label = wrapped.lines.join("\n");
        }
    }

    /// Draws this axis onto `surface` immediately.
    pub fn draw_onto(&self, surface: &mut dyn AxisSurface) -> ChartResult<()> {
        surface.draw_axis(self)
    }
}

/// Capability that renders an axis description (tick marks, labels, domain
/// path) onto some drawing target.
pub trait AxisSurface {
    fn draw_axis(&mut self, axis: &AxisDescription) -> ChartResult<()>;
}
