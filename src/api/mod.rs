//! Chart orchestration: configuration, lifecycle and the render pass that
//! ties domain computation, axes and container fitting together.

mod cartesian_chart;
mod chart_config;

pub use cartesian_chart::{
    CartesianChart, ChartLayout, GraphData, GraphDataCallback, MarginsCallback,
    X_AXIS_BAND_HEIGHT, Y_AXIS_LEFT_OFFSET,
};
pub use chart_config::ChartConfig;
