use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use junction_signals::simulation::{
    is_movement_allowed, Junction, Road, SignalColor, SignalState, SimConfig, Turn,
};
use std::time::Duration;

fn routes() -> Vec<(Road, Road)> {
    Road::ALL
        .iter()
        .flat_map(|&origin| {
            Road::ALL
                .iter()
                .filter(move |&&destination| destination != origin)
                .map(move |&destination| (origin, destination))
        })
        .collect()
}

fn bench_is_movement_allowed(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_movement_allowed");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    let routes = routes();
    let mut half_green = SignalState::new();
    for road in [Road::North, Road::South] {
        for turn in Turn::ALL {
            half_green.set(road, turn, SignalColor::Green);
        }
    }

    for (label, signals) in [("all_red", SignalState::new()), ("half_green", half_green)] {
        group.bench_function(label, |b| {
            b.iter(|| {
                for &(origin, destination) in &routes {
                    let _ = black_box(is_movement_allowed(origin, destination, &signals));
                }
            });
        });
    }
    group.finish();
}

fn bench_junction_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("junction_tick");

    for &max_vehicles in [8usize, 24, 96].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_vehicles),
            &max_vehicles,
            |b, &max_vehicles| {
                let mut junction = Junction::new(SimConfig {
                    seed: Some(11),
                    max_vehicles,
                    spawn_interval_secs: 0.5,
                    ..SimConfig::default()
                });
                junction.controller.toggle_all_for_road(Road::East);
                junction.controller.toggle_all_for_road(Road::West);
                b.iter(|| junction.tick(black_box(0.5)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_is_movement_allowed, bench_junction_tick);
criterion_main!(benches);
