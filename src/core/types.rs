use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a viewport from fractional container dimensions, rounding up.
    #[must_use]
    pub fn from_container(width: f64, height: f64) -> Self {
        let clamp = |value: f64| -> u32 {
            if value.is_finite() && value > 0.0 {
                value.ceil().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        Self::new(clamp(width), clamp(height))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Chart families sharing the Cartesian axis machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartType {
    #[default]
    AreaChart,
    LineChart,
    VerticalBarChart,
    VerticalStackedBarChart,
    GroupedVerticalBarChart,
}

impl ChartType {
    /// Returns `true` for chart types whose x axis is a continuous numeric or
    /// date scale.
    #[must_use]
    pub const fn has_continuous_x_axis(self) -> bool {
        matches!(self, Self::AreaChart | Self::LineChart)
    }
}

/// Horizontal position of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Date(DateTime<Utc>),
}

impl XValue {
    /// Comparable numeric form: the number itself, or milliseconds since the
    /// Unix epoch for dates.
    #[must_use]
    pub fn normalized(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Date(time) => datetime_to_unix_millis(time),
        }
    }

    #[must_use]
    pub fn is_date(self) -> bool {
        matches!(self, Self::Date(_))
    }

    #[must_use]
    pub fn as_date(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(time) => Some(time),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for XValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Per-point override of what a callout shows for the y value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalloutData {
    /// Replaces the rendered y value.
    Text(String),
    /// Named sub-counts shown instead of a single value, in insertion order.
    Breakdown(IndexMap<String, f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub callout_data: Option<CalloutData>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self {
            x: x.into(),
            y,
            legend: None,
            color: None,
            callout_data: None,
        }
    }

    pub fn from_decimal(x: impl Into<XValue>, y: Decimal) -> ChartResult<Self> {
        Ok(Self::new(x, decimal_to_f64(y, "y")?))
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_callout_data(mut self, data: CalloutData) -> Self {
        self.callout_data = Some(data);
        self
    }
}

/// Named, colored collection of points drawn as one line or area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub legend: String,
    #[serde(default)]
    pub color: String,
    pub data: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(legend: impl Into<String>, color: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            legend: legend.into(),
            color: color.into(),
            data,
        }
    }
}

/// Insets reserved around the plotting surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 35.0,
            left: 40.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Width left for plotting once horizontal margins are removed.
    #[must_use]
    pub fn inner_width(self, container_width: f64) -> f64 {
        container_width - self.left - self.right
    }
}

/// Caller-provided margin overrides; missing sides use [`Margins::default`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginsOverride {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
}

impl MarginsOverride {
    #[must_use]
    pub fn resolve(self) -> Margins {
        let defaults = Margins::default();
        Margins {
            top: self.top.unwrap_or(defaults.top),
            right: self.right.unwrap_or(defaults.right),
            bottom: self.bottom.unwrap_or(defaults.bottom),
            left: self.left.unwrap_or(defaults.left),
        }
    }
}
