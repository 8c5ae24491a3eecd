//! Cross-series callout aggregation.
//!
//! Hovering an x position shows every series value at that position in one
//! callout. Groups are keyed by the normalized x value (dates compare by
//! timestamp) and keep the order in which series and points were supplied.

use indexmap::IndexMap;
use indexmap::map::Entry;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CalloutData, Series, XValue};

/// One series' contribution to a callout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutValue {
    pub legend: String,
    pub y: f64,
    pub color: String,
    pub callout_data: Option<CalloutData>,
}

impl CalloutValue {
    #[must_use]
    pub fn has_breakdown(&self) -> bool {
        matches!(self.callout_data, Some(CalloutData::Breakdown(_)))
    }
}

/// Every contribution sharing one x value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutGroup {
    /// The x value as first seen.
    pub x: XValue,
    pub values: Vec<CalloutValue>,
}

impl CalloutGroup {
    #[must_use]
    pub fn key(&self) -> f64 {
        self.x.normalized()
    }
}

/// Groups points of all series by x value.
///
/// Returns one group per distinct x, in first-seen order; each group lists
/// its contributions in series order. Points take the color of their series
/// and its legend unless they carry their own.
#[must_use]
pub fn aggregate_callouts(series: &[Series]) -> Vec<CalloutGroup> {
    let mut groups: IndexMap<OrderedFloat<f64>, CalloutGroup> = IndexMap::new();

    for entry in series {
        for point in &entry.data {
            let value = CalloutValue {
                legend: point
                    .legend
                    .clone()
                    .unwrap_or_else(|| entry.legend.clone()),
                y: point.y,
                color: entry.color.clone(),
                callout_data: point.callout_data.clone(),
            };
            match groups.entry(OrderedFloat(point.x.normalized())) {
                Entry::Occupied(mut slot) => slot.get_mut().values.push(value),
                Entry::Vacant(slot) => {
                    slot.insert(CalloutGroup {
                        x: point.x,
                        values: vec![value],
                    });
                }
            }
        }
    }

    trace!(groups = groups.len(), "aggregated callouts");
    groups.into_values().collect()
}

/// Finds the group for `x`, if any.
#[must_use]
pub fn find_callout_group(groups: &[CalloutGroup], x: XValue) -> Option<&CalloutGroup> {
    let key = OrderedFloat(x.normalized());
    groups.iter().find(|group| OrderedFloat(group.key()) == key)
}

/// Whether any contribution carries a named breakdown instead of a value.
#[must_use]
pub fn has_breakdown(values: &[CalloutValue]) -> bool {
    values.iter().any(CalloutValue::has_breakdown)
}

/// Display model for one contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalloutBlock {
    /// A legend with one value.
    Single {
        legend: String,
        color: String,
        /// `"legend (y)"`, shown when any block in the callout is a breakdown.
        header: Option<String>,
        /// Override text, or the y value.
        value: String,
    },
    /// A legend with named sub-counts.
    Breakdown {
        header: String,
        color: String,
        rows: Vec<(String, f64)>,
    },
}

/// Display model for a multi-series callout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutContent {
    pub x_label: String,
    pub blocks: Vec<CalloutBlock>,
    /// Blocks are laid out side by side when a breakdown is present.
    pub inline_layout: bool,
}

impl CalloutContent {
    #[must_use]
    pub fn from_group(group: &CalloutGroup, x_label: impl Into<String>) -> Self {
        let inline_layout = has_breakdown(&group.values);
        let blocks = group
            .values
            .iter()
            .map(|value| {
                let header = format!("{} ({})", value.legend, value.y);
                match &value.callout_data {
                    Some(CalloutData::Breakdown(counts)) => CalloutBlock::Breakdown {
                        header,
                        color: value.color.clone(),
                        rows: counts
                            .iter()
                            .map(|(name, count)| (name.clone(), *count))
                            .collect(),
                    },
                    Some(CalloutData::Text(text)) => CalloutBlock::Single {
                        legend: value.legend.clone(),
                        color: value.color.clone(),
                        header: inline_layout.then_some(header),
                        value: text.clone(),
                    },
                    None => CalloutBlock::Single {
                        legend: value.legend.clone(),
                        color: value.color.clone(),
                        header: inline_layout.then_some(header),
                        value: value.y.to_string(),
                    },
                }
            })
            .collect();

        Self {
            x_label: x_label.into(),
            blocks,
            inline_layout,
        }
    }
}

/// Adds `legend` to the selection, or removes it when already selected.
#[must_use]
pub fn toggle_legend_selection(selected: &[String], legend: &str) -> Vec<String> {
    match selected.iter().position(|entry| entry == legend) {
        Some(index) => selected
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, entry)| entry.clone())
            .collect(),
        None => {
            let mut next = selected.to_vec();
            next.push(legend.to_owned());
            next
        }
    }
}
