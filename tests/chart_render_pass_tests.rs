use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use cartesian_rs::api::{CartesianChart, ChartConfig, GraphData};
use cartesian_rs::axis::AxisOrientation;
use cartesian_rs::core::{
    ChartType, DataPoint, Margins, MarginsOverride, Series, ValueFormat, XValue,
};
use cartesian_rs::labels::{HeuristicTextMeasurer, LabelWrapOptions};
use cartesian_rs::layout::{ElementBox, FitOutcome, LayoutHost, ManualFrameScheduler};
use cartesian_rs::render::{AxisStyle, NullRenderer};
use cartesian_rs::{ChartError, ChartLayout};
use chrono::{TimeZone, Utc};

struct FixedHost {
    width: f64,
    height: f64,
}

impl LayoutHost for FixedHost {
    fn container_box(&self) -> Option<ElementBox> {
        Some(ElementBox::new(self.width, self.height))
    }

    fn legend_box(&self) -> Option<ElementBox> {
        Some(ElementBox::new(self.width, 32.0))
    }
}

fn sales_series() -> Vec<Series> {
    vec![
        Series::new(
            "online",
            "#0078d4",
            (1..=10)
                .map(|x| DataPoint::new(f64::from(x), f64::from(x) * 9.5))
                .collect(),
        ),
        Series::new(
            "retail",
            "#e3008c",
            vec![DataPoint::new(1.0, 5.0), DataPoint::new(5.0, 40.0)],
        ),
    ]
}

/// Mounts `chart` and lets the container measure at 600 x 350 plot size.
fn mount_at_default_size(chart: &mut CartesianChart, scheduler: &mut ManualFrameScheduler) {
    chart.mount(scheduler).expect("mount frame");
    let host = FixedHost {
        width: 600.0,
        height: 382.0,
    };
    for handle in scheduler.drain() {
        chart.on_frame(handle, &host);
    }
}

fn render(config: ChartConfig, series: &[Series]) -> ChartLayout {
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(config).expect("valid config");
    mount_at_default_size(&mut chart, &mut scheduler);
    chart
        .render_pass(series, &mut scheduler)
        .expect("render pass")
}

#[test]
fn render_pass_builds_axes_for_measured_container() {
    let layout = render(ChartConfig::new(ChartType::LineChart), &sales_series());

    assert_eq!(layout.viewport.width, 600);
    assert_eq!(layout.viewport.height, 350);
    assert_eq!(layout.x_axis.axis.labels().first().copied(), Some("1"));
    assert_eq!(layout.x_axis.axis.labels().last().copied(), Some("10"));
    assert_eq!(layout.x_axis.axis.range, (40.0, 580.0));
    assert_eq!(layout.y_axis.tick_values(), vec![0.0, 24.0, 48.0, 72.0, 96.0]);
    assert_eq!(layout.y_axis.axis.tick_padding, 10.0);
    assert_eq!(layout.x_axis_origin, (0.0, 315.0));
    assert_eq!(layout.y_axis_origin, (40.0, 0.0));
}

#[test]
fn rtl_render_pass_mirrors_axes() {
    let layout = render(
        ChartConfig::new(ChartType::AreaChart).with_rtl(true),
        &sales_series(),
    );

    assert_eq!(layout.x_axis.axis.ticks[0].label, "10");
    assert_relative_eq!(layout.x_axis.axis.ticks[0].position, 40.0);
    assert_eq!(layout.x_axis.axis.range, (40.0, 560.0));
    assert_eq!(layout.y_axis.axis.orientation, AxisOrientation::Right);
    assert_eq!(layout.y_axis_origin, (560.0, 0.0));
}

#[test]
fn date_series_produce_time_axis() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let series = vec![Series::new(
        "visits",
        "#107c10",
        vec![DataPoint::new(start, 3.0), DataPoint::new(end, 8.0)],
    )];

    let layout = render(ChartConfig::default(), &series);
    assert!(layout.x_axis.scale.is_time());
    assert_eq!(layout.x_axis.axis.labels()[0], "2024");

    let forced = render(
        ChartConfig::default().with_x_axis_date(Some(false)),
        &[Series::new("plain", "#000", vec![DataPoint::new(2.0, 1.0), DataPoint::new(4.0, 3.0)])],
    );
    assert!(!forced.x_axis.scale.is_time());
}

#[test]
fn callbacks_receive_margins_and_scales() {
    let margins_seen = Rc::new(RefCell::new(Vec::<Margins>::new()));
    let graph_seen = Rc::new(RefCell::new(Vec::<GraphData>::new()));
    let margins_sink = Rc::clone(&margins_seen);
    let graph_sink = Rc::clone(&graph_seen);

    let config = ChartConfig::new(ChartType::LineChart).with_margins(MarginsOverride {
        left: Some(60.0),
        ..MarginsOverride::default()
    });
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(config)
        .expect("valid config")
        .with_margins_callback(move |margins| margins_sink.borrow_mut().push(*margins))
        .with_graph_data_callback(move |data| graph_sink.borrow_mut().push(*data));
    mount_at_default_size(&mut chart, &mut scheduler);

    chart
        .render_pass(&sales_series(), &mut scheduler)
        .expect("render pass");

    assert_eq!(
        *margins_seen.borrow(),
        vec![Margins::new(20.0, 20.0, 35.0, 60.0)]
    );
    let graph = graph_seen.borrow();
    assert_eq!(graph.len(), 1);
    assert_eq!(graph[0].container_width, 600.0);
    assert_eq!(graph[0].container_height, 350.0);
    let left = graph[0]
        .x_scale
        .x_to_pixel(XValue::Number(1.0))
        .expect("x pixel");
    assert_relative_eq!(left, 60.0);
    let bottom = graph[0].y_scale.domain_to_pixel(0.0).expect("y pixel");
    assert_relative_eq!(bottom, 315.0);
}

#[test]
fn parent_container_schedules_measurement_each_pass() {
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(ChartConfig::default().with_parent_container(true))
        .expect("valid config");
    mount_at_default_size(&mut chart, &mut scheduler);

    chart
        .render_pass(&sales_series(), &mut scheduler)
        .expect("render pass");
    assert_eq!(scheduler.queued_len(), 1);
    assert_eq!(chart.fit_controller().pending_tasks().len(), 1);
}

#[test]
fn unsupported_chart_type_fails_render_pass() {
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(ChartConfig::new(ChartType::GroupedVerticalBarChart))
        .expect("valid config");

    let error = chart
        .render_pass(&sales_series(), &mut scheduler)
        .expect_err("bar charts are not cartesian line charts");
    assert!(matches!(error, ChartError::UnsupportedChartType { .. }));
}

#[test]
fn axes_lower_into_render_frame() {
    let layout = render(ChartConfig::new(ChartType::LineChart), &sales_series());

    let mut renderer = NullRenderer::default();
    layout
        .render_axes(&mut renderer, AxisStyle::default())
        .expect("render axes");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_text_count, 15);
    assert_eq!(renderer.last_line_count, 19);
    assert!(renderer.last_texts.contains(&"96".to_owned()));
}

#[test]
fn drawing_before_first_measurement_is_rejected() {
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart =
        CartesianChart::new(ChartConfig::new(ChartType::LineChart)).expect("valid config");
    let layout = chart
        .render_pass(&sales_series(), &mut scheduler)
        .expect("render pass");

    let error = layout
        .render_axes(&mut NullRenderer::default(), AxisStyle::default())
        .expect_err("zero viewport");
    assert!(matches!(error, ChartError::InvalidViewport { .. }));
}

#[test]
fn wrapped_x_labels_report_extra_height() {
    let mut layout = render(ChartConfig::new(ChartType::LineChart), &sales_series());
    let outcome = layout.wrap_x_axis_labels(
        1,
        true,
        &HeuristicTextMeasurer,
        &LabelWrapOptions::default(),
    );

    assert_eq!(outcome.extra_height, 0.0);
    assert_eq!(layout.x_axis.axis.ticks[9].label, "1...");
    assert_eq!(outcome.labels[9].tooltip.as_deref(), Some("10"));
}

#[test]
fn callout_content_respects_tooltip_settings() {
    let series = sales_series();
    let chart = CartesianChart::new(ChartConfig::new(ChartType::LineChart)).expect("config");
    let groups = chart.callout_groups(&series);

    let content = chart
        .callout_content(&groups, XValue::Number(1.0), "1", None)
        .expect("callout at x=1");
    assert_eq!(content.blocks.len(), 2);

    let single = CartesianChart::new(
        ChartConfig::new(ChartType::LineChart).with_multi_stack_callout(false),
    )
    .expect("config");
    let content = single
        .callout_content(&groups, XValue::Number(1.0), "1", Some("retail"))
        .expect("callout at x=1");
    assert_eq!(content.blocks.len(), 1);

    let hidden = CartesianChart::new(ChartConfig::new(ChartType::LineChart).with_hide_tooltip(true))
        .expect("config");
    assert!(
        hidden
            .callout_content(&groups, XValue::Number(1.0), "1", None)
            .is_none()
    );
    assert!(
        chart
            .callout_content(&groups, XValue::Number(42.0), "42", None)
            .is_none()
    );
}

#[test]
fn size_change_on_area_chart_triggers_rerender() {
    let rerenders = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rerenders);
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(ChartConfig::new(ChartType::AreaChart))
        .expect("config")
        .with_rerender_callback(move |value| sink.borrow_mut().push(value));
    mount_at_default_size(&mut chart, &mut scheduler);

    let handle = chart
        .update_config(
            ChartConfig::new(ChartType::AreaChart).with_size(Some(900.0), Some(500.0)),
            &mut scheduler,
        )
        .expect("valid config")
        .expect("measurement scheduled");
    let outcome = chart.on_frame(
        handle,
        &FixedHost {
            width: 900.0,
            height: 532.0,
        },
    );

    assert!(matches!(
        outcome,
        FitOutcome::Resized {
            rerender_requested: true,
            ..
        }
    ));
    assert_eq!(*rerenders.borrow(), vec![true]);
    assert_eq!(chart.container_size().height, 500.0);
}

#[test]
fn chart_type_change_applies_to_following_resize() {
    let rerenders = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rerenders);
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart = CartesianChart::new(ChartConfig::new(ChartType::LineChart))
        .expect("config")
        .with_rerender_callback(move |value| sink.borrow_mut().push(value));
    mount_at_default_size(&mut chart, &mut scheduler);

    let handle = chart
        .update_config(
            ChartConfig::new(ChartType::AreaChart).with_size(Some(900.0), Some(500.0)),
            &mut scheduler,
        )
        .expect("valid config")
        .expect("measurement scheduled");
    assert_eq!(chart.fit_controller().chart_type(), ChartType::AreaChart);
    let outcome = chart.on_frame(
        handle,
        &FixedHost {
            width: 900.0,
            height: 532.0,
        },
    );
    assert!(matches!(
        outcome,
        FitOutcome::Resized {
            rerender_requested: true,
            ..
        }
    ));
    assert_eq!(*rerenders.borrow(), vec![true]);

    let handle = chart
        .update_config(
            ChartConfig::new(ChartType::LineChart).with_size(Some(700.0), Some(400.0)),
            &mut scheduler,
        )
        .expect("valid config")
        .expect("measurement scheduled");
    let outcome = chart.on_frame(
        handle,
        &FixedHost {
            width: 700.0,
            height: 432.0,
        },
    );
    assert!(matches!(
        outcome,
        FitOutcome::Resized {
            rerender_requested: false,
            ..
        }
    ));
    assert_eq!(*rerenders.borrow(), vec![true]);
}

#[test]
fn config_loads_from_json_with_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{
            "chart_type": "LineChart",
            "width": 800.0,
            "rtl": true,
            "margins": { "left": 0.0 },
            "tick_params": { "tick_format": "%b %d" }
        }"#,
    )
    .expect("config json");

    assert_eq!(config.chart_type, ChartType::LineChart);
    assert_eq!(config.width, Some(800.0));
    assert_eq!(config.height, None);
    assert_eq!(config.y_axis_tick_count, 4);
    assert!(config.multi_stack_callout);
    assert!(config.rtl);
    assert_eq!(config.margins.resolve().left, 0.0);
    assert_eq!(
        config.tick_params.tick_format.as_ref().map(|pattern| pattern.as_str()),
        Some("%b %d")
    );

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored.width, config.width);
    assert!(ChartConfig::from_json_str(r#"{ "y_axis_tick_count": 0 }"#).is_err());
}

#[test]
fn invalid_config_is_rejected() {
    let zero_ticks = ChartConfig::default().with_y_axis_tick_count(0);
    assert!(matches!(
        CartesianChart::new(zero_ticks),
        Err(ChartError::InvalidData(_))
    ));

    let negative_width = ChartConfig::default().with_size(Some(-1.0), None);
    assert!(negative_width.validate().is_err());

    let custom = ChartConfig::default().with_y_axis_tick_format(ValueFormat::custom(|v| format!("{v}")));
    assert!(custom.validate().is_ok());
}
