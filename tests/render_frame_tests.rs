use approx::assert_relative_eq;
use cartesian_rs::axis::{AxisDescription, AxisOrientation, AxisSurface, AxisTick};
use cartesian_rs::core::Viewport;
use cartesian_rs::render::{
    AxisStyle, Color, LinePrimitive, NullRenderer, RenderFrame, RenderFrameAxisSurface, Renderer,
    TextHAlign, TextPrimitive,
};

fn tick(value: f64, position: f64, label: &str) -> AxisTick {
    AxisTick {
        value,
        position,
        label: label.to_owned(),
    }
}

fn bottom_axis() -> AxisDescription {
    AxisDescription {
        orientation: AxisOrientation::Bottom,
        ticks: vec![tick(0.0, 40.0, "0"), tick(5.0, 310.0, "5"), tick(10.0, 580.0, "10")],
        tick_size_inner: 10.0,
        tick_size_outer: 0.0,
        tick_padding: 10.0,
        range: (40.0, 580.0),
    }
}

#[test]
fn bottom_axis_draws_domain_ticks_and_centered_labels() {
    let mut frame = RenderFrame::new(Viewport::new(600, 350));
    let style = AxisStyle::default();
    RenderFrameAxisSurface::new(&mut frame, (0.0, 315.0), style)
        .draw_axis(&bottom_axis())
        .expect("draw axis");

    assert_eq!(frame.lines.len(), 4);
    let domain = frame.lines[0];
    assert_eq!((domain.x1, domain.y1, domain.x2, domain.y2), (40.0, 315.0, 580.0, 315.0));
    let first_tick = frame.lines[1];
    assert_eq!((first_tick.x1, first_tick.y1, first_tick.y2), (40.0, 315.0, 325.0));

    assert_eq!(frame.texts.len(), 3);
    let label = &frame.texts[1];
    assert_eq!(label.text, "5");
    assert_eq!(label.h_align, TextHAlign::Center);
    assert_relative_eq!(label.x, 310.0);
    assert_relative_eq!(label.y, 315.0 + 20.0 + 0.71 * 10.0);
    frame.validate().expect("valid frame");
}

#[test]
fn left_axis_extends_grid_lines_across_plot() {
    let axis = AxisDescription {
        orientation: AxisOrientation::Left,
        ticks: vec![tick(0.0, 315.0, "0.0"), tick(96.0, 20.0, "96")],
        tick_size_inner: -540.0,
        tick_size_outer: 6.0,
        tick_padding: 10.0,
        range: (315.0, 20.0),
    };
    let mut frame = RenderFrame::new(Viewport::new(600, 350));
    axis.draw_onto(&mut RenderFrameAxisSurface::new(
        &mut frame,
        (40.0, 0.0),
        AxisStyle::default(),
    ))
    .expect("draw axis");

    // Domain line, two outer caps, two grid lines.
    assert_eq!(frame.lines.len(), 5);
    let cap = frame.lines[1];
    assert_eq!((cap.x1, cap.x2), (40.0, 34.0));
    let grid = frame.lines[3];
    assert_eq!((grid.x1, grid.y1, grid.x2, grid.y2), (40.0, 315.0, 580.0, 315.0));

    let label = &frame.texts[0];
    assert_eq!(label.h_align, TextHAlign::Right);
    assert_relative_eq!(label.x, 30.0);
    assert_relative_eq!(label.y, 315.0 + 0.32 * 10.0);
}

#[test]
fn right_axis_labels_are_left_aligned_outside_plot() {
    let axis = AxisDescription {
        orientation: AxisOrientation::Right,
        ticks: vec![tick(10.0, 100.0, "10")],
        tick_size_inner: 0.0,
        tick_size_outer: 0.0,
        tick_padding: 12.0,
        range: (315.0, 20.0),
    };
    let mut frame = RenderFrame::new(Viewport::new(600, 350));
    axis.draw_onto(&mut RenderFrameAxisSurface::new(
        &mut frame,
        (560.0, 0.0),
        AxisStyle::default(),
    ))
    .expect("draw axis");

    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.texts[0].h_align, TextHAlign::Left);
    assert_relative_eq!(frame.texts[0].x, 572.0);
}

#[test]
fn wrapped_labels_stack_one_text_per_line() {
    let mut axis = bottom_axis();
    axis.ticks = vec![tick(0.0, 40.0, "New York\nCity")];
    let mut frame = RenderFrame::new(Viewport::new(600, 350));
    let style = AxisStyle::default();
    axis.draw_onto(&mut RenderFrameAxisSurface::new(&mut frame, (0.0, 0.0), style))
        .expect("draw axis");

    assert_eq!(frame.texts.len(), 2);
    assert_eq!(frame.texts[1].text, "City");
    assert_relative_eq!(
        frame.texts[1].y - frame.texts[0].y,
        style.line_height_em * style.font_size_px,
        epsilon = 1e-9
    );
}

#[test]
fn empty_labels_are_skipped() {
    let mut axis = bottom_axis();
    axis.ticks = vec![tick(0.0, 40.0, "")];
    let mut frame = RenderFrame::new(Viewport::new(600, 350));
    axis.draw_onto(&mut RenderFrameAxisSurface::new(
        &mut frame,
        (0.0, 0.0),
        AxisStyle::default(),
    ))
    .expect("draw axis");
    assert!(frame.texts.is_empty());
    frame.validate().expect("valid frame");
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    assert!(frame.is_empty());
    frame.push_line(LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0)));
    assert!(frame.validate().is_err());

    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_text(TextPrimitive::new(
        "label",
        1.0,
        1.0,
        10.0,
        Color::rgba(0.0, 0.0, 0.0, 2.0),
        TextHAlign::Left,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn null_renderer_rejects_empty_viewport() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(0, 10));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}
