use cartesian_rs::api::{CartesianChart, ChartConfig};
use cartesian_rs::callout::aggregate_callouts;
use cartesian_rs::core::{ChartType, DataPoint, LinearScale, Series, compute_tick_steps};
use cartesian_rs::layout::{ElementBox, LayoutHost, ManualFrameScheduler};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct BenchHost;

impl LayoutHost for BenchHost {
    fn container_box(&self) -> Option<ElementBox> {
        Some(ElementBox::new(1920.0, 1080.0))
    }

    fn legend_box(&self) -> Option<ElementBox> {
        Some(ElementBox::new(1920.0, 32.0))
    }
}

fn build_series(series_count: usize, points: usize) -> Vec<Series> {
    (0..series_count)
        .map(|index| {
            let data = (0..points)
                .map(|i| {
                    let x = i as f64;
                    DataPoint::new(x, 100.0 + (x * 0.05 + index as f64).sin() * 25.0)
                })
                .collect();
            Series::new(format!("series-{index}"), "#0078d4", data)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (40.0, 1_880.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_tick_steps(c: &mut Criterion) {
    c.bench_function("compute_tick_steps_4", |b| {
        b.iter(|| compute_tick_steps(black_box(98_765.0), black_box(-1_234.0), black_box(4)))
    });
}

fn bench_callout_aggregation_10k(c: &mut Criterion) {
    let series = build_series(5, 2_000);

    c.bench_function("aggregate_callouts_5x2k", |b| {
        b.iter(|| {
            let groups = aggregate_callouts(black_box(&series));
            black_box(groups.len());
        })
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let series = build_series(3, 1_000);
    let mut scheduler = ManualFrameScheduler::default();
    let mut chart =
        CartesianChart::new(ChartConfig::new(ChartType::AreaChart)).expect("valid config");
    chart.mount(&mut scheduler).expect("mount frame");
    for handle in scheduler.drain() {
        chart.on_frame(handle, &BenchHost);
    }

    c.bench_function("render_pass_3x1k", |b| {
        b.iter(|| {
            let layout = chart
                .render_pass(black_box(&series), &mut scheduler)
                .expect("render pass");
            black_box(layout.y_axis.axis.ticks.len());
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_tick_steps,
    bench_callout_aggregation_10k,
    bench_render_pass
);
criterion_main!(benches);
