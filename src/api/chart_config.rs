use serde::{Deserialize, Serialize};

use crate::axis::TickParams;
use crate::core::{ChartType, MarginsOverride, ValueFormat};
use crate::error::{ChartError, ChartResult};
use crate::layout::SizeProps;

/// Public chart setup.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. A custom y formatter is not
/// serialized and falls back to the SI default on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart_type: ChartType,
    /// Explicit width; the container decides when absent.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margins: MarginsOverride,
    #[serde(default = "default_y_axis_tick_count")]
    pub y_axis_tick_count: usize,
    #[serde(skip)]
    pub y_axis_tick_format: ValueFormat,
    #[serde(default)]
    pub y_min_value: f64,
    #[serde(default)]
    pub y_max_value: f64,
    /// Maximum computed by the chart itself, e.g. the top of stacked areas.
    #[serde(default)]
    pub max_of_y: Option<f64>,
    /// `None` detects the axis type from the data.
    #[serde(default)]
    pub is_x_axis_date: Option<bool>,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default)]
    pub tick_params: TickParams,
    /// Chart lives inside a host-managed container that can resize it.
    #[serde(default)]
    pub has_parent_container: bool,
    #[serde(default)]
    pub event_label_height: Option<f64>,
    #[serde(default)]
    pub hide_tooltip: bool,
    #[serde(default = "default_multi_stack_callout")]
    pub multi_stack_callout: bool,
}

fn default_y_axis_tick_count() -> usize {
    4
}

fn default_multi_stack_callout() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(ChartType::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            width: None,
            height: None,
            margins: MarginsOverride::default(),
            y_axis_tick_count: default_y_axis_tick_count(),
            y_axis_tick_format: ValueFormat::default(),
            y_min_value: 0.0,
            y_max_value: 0.0,
            max_of_y: None,
            is_x_axis_date: None,
            rtl: false,
            tick_params: TickParams::default(),
            has_parent_container: false,
            event_label_height: None,
            hide_tooltip: false,
            multi_stack_callout: default_multi_stack_callout(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: MarginsOverride) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_y_axis_tick_count(mut self, tick_count: usize) -> Self {
        self.y_axis_tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_y_axis_tick_format(mut self, format: ValueFormat) -> Self {
        self.y_axis_tick_format = format;
        self
    }

    #[must_use]
    pub fn with_y_bounds(mut self, min: f64, max: f64) -> Self {
        self.y_min_value = min;
        self.y_max_value = max;
        self
    }

    #[must_use]
    pub fn with_max_of_y(mut self, max_of_y: Option<f64>) -> Self {
        self.max_of_y = max_of_y;
        self
    }

    #[must_use]
    pub fn with_x_axis_date(mut self, is_date: Option<bool>) -> Self {
        self.is_x_axis_date = is_date;
        self
    }

    #[must_use]
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    #[must_use]
    pub fn with_tick_params(mut self, tick_params: TickParams) -> Self {
        self.tick_params = tick_params;
        self
    }

    #[must_use]
    pub fn with_parent_container(mut self, has_parent_container: bool) -> Self {
        self.has_parent_container = has_parent_container;
        self
    }

    #[must_use]
    pub fn with_event_label_height(mut self, height: Option<f64>) -> Self {
        self.event_label_height = height;
        self
    }

    #[must_use]
    pub fn with_hide_tooltip(mut self, hide_tooltip: bool) -> Self {
        self.hide_tooltip = hide_tooltip;
        self
    }

    #[must_use]
    pub fn with_multi_stack_callout(mut self, multi_stack_callout: bool) -> Self {
        self.multi_stack_callout = multi_stack_callout;
        self
    }

    #[must_use]
    pub fn size_props(&self) -> SizeProps {
        SizeProps {
            width: self.width,
            height: self.height,
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "chart {name} must be finite and > 0"
                    )));
                }
            }
        }
        if self.y_axis_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "y axis tick count must be >= 1".to_owned(),
            ));
        }
        if !self.y_min_value.is_finite() || !self.y_max_value.is_finite() {
            return Err(ChartError::InvalidData(
                "declared y bounds must be finite".to_owned(),
            ));
        }
        if self.max_of_y.is_some_and(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "max_of_y must be finite".to_owned(),
            ));
        }
        if self
            .event_label_height
            .is_some_and(|height| !height.is_finite() || height < 0.0)
        {
            return Err(ChartError::InvalidData(
                "event label height must be finite and >= 0".to_owned(),
            ));
        }

        let margins = self.margins.resolve();
        if [margins.top, margins.right, margins.bottom, margins.left]
            .iter()
            .any(|side| !side.is_finite() || *side < 0.0)
        {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
