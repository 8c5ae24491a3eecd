use serde::{Deserialize, Serialize};

use crate::axis::{AxisDescription, AxisOrientation, AxisSurface};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Baseline shift, in ems, that visually centers a label on its tick.
const VERTICAL_AXIS_BASELINE_EM: f64 = 0.32;
/// Baseline shift, in ems, that hangs a label below a horizontal axis.
const HORIZONTAL_AXIS_BASELINE_EM: f64 = 0.71;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub line_color: Color,
    pub label_color: Color,
    pub stroke_width: f64,
    pub font_size_px: f64,
    /// Advance between lines of a wrapped label, in ems.
    pub line_height_em: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0.82, 0.82, 0.82),
            label_color: Color::rgb(0.2, 0.2, 0.2),
            stroke_width: 1.0,
            font_size_px: 10.0,
            line_height_em: 1.1,
        }
    }
}

/// Lowers axis descriptions into [`RenderFrame`] primitives.
///
/// `origin` is where the axis line sits in chart pixels: tick positions run
/// along it and ticks and labels extend outward from it.
#[derive(Debug)]
pub struct RenderFrameAxisSurface<'a> {
    frame: &'a mut RenderFrame,
    origin: (f64, f64),
    style: AxisStyle,
}

impl<'a> RenderFrameAxisSurface<'a> {
    #[must_use]
    pub fn new(frame: &'a mut RenderFrame, origin: (f64, f64), style: AxisStyle) -> Self {
        Self {
            frame,
            origin,
            style,
        }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.frame.push_line(LinePrimitive::new(
            from.0,
            from.1,
            to.0,
            to.1,
            self.style.stroke_width,
            self.style.line_color,
        ));
    }

    fn label(&mut self, text: &str, anchor: (f64, f64), first_baseline_em: f64, h_align: TextHAlign) {
        let font_size = self.style.font_size_px;
        for (index, line) in text.split('\n').enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline_em = first_baseline_em + index as f64 * self.style.line_height_em;
            self.frame.push_text(TextPrimitive::new(
                line,
                anchor.0,
                anchor.1 + baseline_em * font_size,
                font_size,
                self.style.label_color,
                h_align,
            ));
        }
    }
}

impl AxisSurface for RenderFrameAxisSurface<'_> {
    fn draw_axis(&mut self, axis: &AxisDescription) -> ChartResult<()> {
        let (origin_x, origin_y) = self.origin;
        let outward = axis.orientation.outward_sign();
        let (range_start, range_end) = axis.range;
        let label_offset = outward * axis.label_offset();

        // Map (along-axis, across-axis) offsets to chart pixels.
        let place = |along: f64, across: f64| -> (f64, f64) {
            if axis.orientation.is_vertical() {
                (origin_x + across, origin_y + along)
            } else {
                (origin_x + along, origin_y + across)
            }
        };

        self.line(place(range_start, 0.0), place(range_end, 0.0));
        if axis.tick_size_outer != 0.0 {
            let cap = outward * axis.tick_size_outer;
            self.line(place(range_start, 0.0), place(range_start, cap));
            self.line(place(range_end, 0.0), place(range_end, cap));
        }

        for tick in &axis.ticks {
            if axis.tick_size_inner != 0.0 {
                self.line(
                    place(tick.position, 0.0),
                    place(tick.position, outward * axis.tick_size_inner),
                );
            }

            let anchor = place(tick.position, label_offset);
            match axis.orientation {
                AxisOrientation::Bottom => {
                    self.label(&tick.label, anchor, HORIZONTAL_AXIS_BASELINE_EM, TextHAlign::Center);
                }
                AxisOrientation::Left => {
                    self.label(&tick.label, anchor, VERTICAL_AXIS_BASELINE_EM, TextHAlign::Right);
                }
                AxisOrientation::Right => {
                    self.label(&tick.label, anchor, VERTICAL_AXIS_BASELINE_EM, TextHAlign::Left);
                }
            }
        }

        Ok(())
    }
}
