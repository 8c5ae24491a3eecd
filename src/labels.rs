//! Axis label wrapping and truncation.
//!
//! Long x-axis labels are either truncated to a character budget (when the
//! host shows the full text in a hover tooltip) or greedily word wrapped
//! against a pixel budget. Text size comes from a [`TextMeasurer`], so the
//! computation never touches a live render tree.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "...";

/// Line height assumed before any wrapped fragment has been measured.
pub const MIN_WRAPPED_LINE_HEIGHT_PX: f64 = 12.0;

/// Word count a label may reach before the axis needs extra vertical room.
const WORDS_WITHOUT_EXTRA_SPACE: usize = 3;

/// Measures rendered text.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Rough measurer assuming glyphs ~0.6em wide and lines 1em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> (f64, f64),
{
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        self(text, font_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelWrapOptions {
    /// Widest a wrapped line may grow before the next word starts a new line.
    pub width_budget_px: f64,
    pub font_size_px: f64,
}

impl Default for LabelWrapOptions {
    fn default() -> Self {
        Self {
            width_budget_px: 10.0,
            font_size_px: 10.0,
        }
    }
}

/// Result of laying out one tick label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedLabel {
    pub lines: SmallVec<[String; 2]>,
    /// Full text to show on hover, set for truncated labels.
    pub tooltip: Option<String>,
    pub truncated: bool,
}

impl WrappedLabel {
    fn single(text: String) -> Self {
        Self {
            lines: smallvec![text],
            tooltip: None,
            truncated: false,
        }
    }

    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.lines.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelWrapOutcome {
    pub labels: Vec<WrappedLabel>,
    /// Extra vertical space the x axis must reserve, never negative.
    pub extra_height: f64,
}

/// Truncates `text` to `char_limit` characters plus [`ELLIPSIS`] when it is
/// longer than the limit; otherwise returns it unchanged.
#[must_use]
pub fn truncate_label(text: &str, char_limit: usize) -> (String, bool) {
    if text.chars().count() > char_limit {
        let mut truncated: String = text.chars().take(char_limit).collect();
        truncated.push_str(ELLIPSIS);
        (truncated, true)
    } else {
        (text.to_owned(), false)
    }
}

/// Greedy word wrap: a word moves to a new line when appending it would push
/// the current line past `width_budget_px`. Words are never split and every
/// line holds at least one word.
#[must_use]
pub fn wrap_words(
    text: &str,
    measurer: &dyn TextMeasurer,
    options: &LabelWrapOptions,
) -> SmallVec<[String; 2]> {
    let mut lines: SmallVec<[String; 2]> = SmallVec::new();
    let mut line: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        line.push(word);
        let candidate = line.join(" ");
        let (width, _) = measurer.measure(&candidate, options.font_size_px);
        if width > options.width_budget_px && line.len() > 1 {
            line.pop();
            lines.push(line.join(" "));
            line.clear();
            line.push(word);
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line.join(" "));
    }
    lines
}

/// Lays out tick labels and reports the extra height the axis needs.
///
/// With `tooltip_enabled`, every label stays on one line, truncated to
/// `char_limit` characters when longer, and no extra height is needed.
/// Otherwise labels are word wrapped; when any label wraps, the extra height
/// is `(most words in a label - 3) * line height`, where line height is the
/// tallest measured last fragment of a wrapped label and at least
/// [`MIN_WRAPPED_LINE_HEIGHT_PX`].
#[must_use]
pub fn wrap_axis_labels<S: AsRef<str>>(
    labels: &[S],
    char_limit: usize,
    tooltip_enabled: bool,
    measurer: &dyn TextMeasurer,
    options: &LabelWrapOptions,
) -> LabelWrapOutcome {
    if tooltip_enabled {
        let labels = labels
            .iter()
            .map(|label| {
                let text = label.as_ref();
                let (shown, truncated) = truncate_label(text, char_limit);
                if truncated {
                    WrappedLabel {
                        lines: smallvec![shown],
                        tooltip: Some(text.to_owned()),
                        truncated: true,
                    }
                } else {
                    WrappedLabel::single(shown)
                }
            })
            .collect();
        return LabelWrapOutcome {
            labels,
            extra_height: 0.0,
        };
    }

    let mut max_words = 0_usize;
    let mut line_height: Option<f64> = None;
    let wrapped: Vec<WrappedLabel> = labels
        .iter()
        .map(|label| {
            let text = label.as_ref();
            max_words = max_words.max(text.split_whitespace().count());
            let lines = wrap_words(text, measurer, options);
            if lines.len() > 1 {
                if let Some(last) = lines.last() {
                    let (_, height) = measurer.measure(last, options.font_size_px);
                    line_height = Some(line_height.map_or(height, |current| current.max(height)));
                }
            }
            WrappedLabel {
                lines,
                tooltip: None,
                truncated: false,
            }
        })
        .collect();

    let extra_height = match line_height {
        Some(measured) => {
            let line_height = measured.max(MIN_WRAPPED_LINE_HEIGHT_PX);
            let extra_words = max_words.saturating_sub(WORDS_WITHOUT_EXTRA_SPACE);
            (extra_words as f64 * line_height).max(0.0)
        }
        None => 0.0,
    };
    trace!(labels = wrapped.len(), max_words, extra_height, "wrapped axis labels");

    LabelWrapOutcome {
        labels: wrapped,
        extra_height,
    }
}
