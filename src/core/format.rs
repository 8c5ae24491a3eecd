//! Tick label formatting.
//!
//! Value axes default to a compact SI-prefixed format with two significant
//! digits (`24`, `1.5k`, `500m`). Numeric x axes use grouped fixed-point
//! output whose precision follows the tick step. Date axes accept strftime
//! patterns or fall back to a format that picks the coarsest calendar field
//! that still distinguishes the tick.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Upper bound for [`precision_for_value`].
pub const MAX_VALUE_DECIMALS: usize = 12;

/// Significant digits used by the default value-axis format.
pub const DEFAULT_SI_PRECISION: usize = 2;

/// Splits `value` (non-negative, finite) into its significant digits and
/// decimal exponent, rounded to `precision` significant digits.
fn decimal_parts(value: f64, precision: usize) -> (String, i32) {
    let precision = precision.max(1);
    let rendered = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Formats `value` with `precision` significant digits and an SI prefix.
#[must_use]
pub fn format_si(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let (coefficient, exponent) = decimal_parts(magnitude, precision);
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let split = exponent - prefix_exponent * 3 + 1;
    let digits = coefficient.len() as i32;

    let body = if split == digits {
        coefficient
    } else if split > digits {
        let mut padded = coefficient;
        padded.extend(std::iter::repeat_n('0', (split - digits) as usize));
        padded
    } else if split > 0 {
        let (whole, fraction) = coefficient.split_at(split as usize);
        format!("{whole}.{fraction}")
    } else {
        let leading = std::iter::repeat_n('0', (1 - split) as usize).collect::<String>();
        let reduced = (precision as i32 + split - 1).max(1) as usize;
        format!("0.{leading}{}", decimal_parts(magnitude, reduced).0)
    };

    let prefix = SI_PREFIXES[(8 + prefix_exponent) as usize];
    format!("{sign}{body}{prefix}")
}

/// Number of decimals needed to tell ticks `step` apart.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = decimal_parts(step.abs(), 1).1;
    (-exponent).max(0) as usize
}

/// Decimals in the shortest exact rendering of `value`, capped at
/// [`MAX_VALUE_DECIMALS`].
#[must_use]
pub fn precision_for_value(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    value
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len().min(MAX_VALUE_DECIMALS))
}

/// Formats `value` with `decimals` fixed decimals and comma-grouped thousands.
#[must_use]
pub fn format_grouped_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match rendered.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + whole.len() / 3 + 1);
    let is_zero = rendered.chars().all(|ch| ch == '0' || ch == '.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Value-axis label format.
#[derive(Clone, Default)]
pub enum ValueFormat {
    /// SI-prefixed with two significant digits.
    #[default]
    Si,
    /// SI-prefixed with the given significant digits.
    SiWithPrecision(usize),
    /// Comma-grouped with a fixed number of decimals.
    Fixed(usize),
    Custom(std::sync::Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl ValueFormat {
    #[must_use]
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(std::sync::Arc::new(formatter))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Si => format_si(value, DEFAULT_SI_PRECISION),
            Self::SiWithPrecision(precision) => format_si(value, *precision),
            Self::Fixed(decimals) => format_grouped_fixed(value, *decimals),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for ValueFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Si => write!(f, "ValueFormat::Si"),
            Self::SiWithPrecision(precision) => write!(f, "ValueFormat::SiWithPrecision({precision})"),
            Self::Fixed(decimals) => write!(f, "ValueFormat::Fixed({decimals})"),
            Self::Custom(_) => write!(f, "ValueFormat::Custom(..)"),
        }
    }
}

/// A validated strftime pattern for date tick labels.
///
/// `%L` (milliseconds) is accepted and rewritten to chrono's `%3f`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatePattern {
    pattern: String,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> ChartResult<Self> {
        let pattern = pattern.replace("%L", "%3f");
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidData(format!(
                "invalid date format pattern `{pattern}`"
            )));
        }
        Ok(Self { pattern })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn format(&self, time: DateTime<Utc>) -> String {
        let mut out = String::new();
        // Validation in `parse` rules out the only error source.
        let _ = write!(out, "{}", time.format(&self.pattern));
        out
    }
}

impl TryFrom<String> for DatePattern {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DatePattern> for String {
    fn from(value: DatePattern) -> Self {
        value.pattern
    }
}

/// Default date tick label: the coarsest calendar field that still
/// distinguishes `time` (milliseconds, seconds, minutes, hours, weekday,
/// week, month, year).
#[must_use]
pub fn format_date_tick(time: DateTime<Utc>) -> String {
    let pattern = if time.nanosecond() % 1_000_000_000 != 0 {
        ".%3f"
    } else if time.second() != 0 {
        ":%S"
    } else if time.minute() != 0 {
        "%I:%M"
    } else if time.hour() != 0 {
        "%I %p"
    } else if time.day() != 1 {
        if time.weekday() == Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        }
    } else if time.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    time.format(pattern).to_string()
}
