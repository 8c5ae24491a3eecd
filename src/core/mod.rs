pub mod domain;
pub mod format;
pub mod primitives;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod time_ticks;
pub mod types;

pub use domain::{
    DomainRange, RTL_EXTRA_MARGIN_RIGHT, compute_domain_range, detect_date_axis,
    resolve_y_bounds, y_min_max,
};
pub use format::{DatePattern, ValueFormat, format_date_tick, format_grouped_fixed, format_si};
pub use scale::{LinearScale, XScale};
pub use ticks::{compute_tick_steps, nice_domain, nice_ticks, tick_increment};
pub use time_scale::TimeScale;
pub use time_ticks::{TimeInterval, TimeUnit, time_ticks};
pub use types::{
    CalloutData, ChartType, DataPoint, Margins, MarginsOverride, Series, Viewport, XValue,
};
