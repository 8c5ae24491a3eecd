//! cartesian-rs: axis, scale and layout engine for cartesian charts.
//!
//! Given series data, margins and a container size, the crate computes the
//! x domain and pixel range, builds numeric or calendar x axes and a value
//! axis, wraps long tick labels, groups hover callouts across series and
//! keeps the plot sized to its host container. Drawing stays with the host:
//! axes are plain descriptions lowered onto an [`axis::AxisSurface`].

pub mod api;
pub mod axis;
pub mod callout;
pub mod core;
pub mod error;
pub mod labels;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{CartesianChart, ChartConfig, ChartLayout, GraphData};
pub use error::{ChartError, ChartResult};
