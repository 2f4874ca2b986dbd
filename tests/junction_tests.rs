//! Headless junction runs

use junction_signals::simulation::{Junction, Road, SignalColor, SimConfig, Turn};

fn seeded_config() -> SimConfig {
    SimConfig {
        seed: Some(7),
        ..SimConfig::default()
    }
}

fn run(junction: &mut Junction, ticks: u32) {
    let delta = junction.config().delta_secs;
    for _ in 0..ticks {
        junction.tick(delta);
    }
}

#[test]
fn test_all_red_junction_backs_up() {
    let mut junction = Junction::new(seeded_config());
    run(&mut junction, 200);

    assert_eq!(junction.stats.total_exited, 0);
    assert_eq!(junction.registry.count(), junction.config().max_vehicles);
    assert_eq!(junction.registry.moving_count(), 0);
    assert!(junction.registry.average_wait_seconds() > 0.0);
}

#[test]
fn test_all_green_junction_drains() {
    let mut junction = Junction::new(seeded_config());
    for road in Road::ALL {
        junction.controller.toggle_all_for_road(road);
    }
    run(&mut junction, 200);

    assert!(junction.stats.total_spawned > 0);
    assert!(junction.stats.total_exited > 0);
    assert_eq!(
        junction.stats.total_spawned,
        junction.stats.total_exited + junction.registry.count() as u64
    );
    assert_eq!(junction.registry.total_wait_seconds(), 0);
}

#[test]
fn test_toggle_takes_effect_on_next_tick() {
    let mut junction = Junction::new(SimConfig {
        spawn_interval_secs: 0.0,
        ..seeded_config()
    });
    let id = junction
        .spawn_vehicle(Road::South, Road::North, 5)
        .expect("spawn should succeed");

    junction.tick(1.0);
    assert!(!junction.registry.by_id(id).unwrap().moving);

    junction.controller.set(Road::North, Turn::Straight, SignalColor::Green);
    junction.tick(1.0);
    let vehicle = junction.registry.by_id(id).unwrap();
    assert!(vehicle.moving);
    assert_eq!(vehicle.wait_time, 0);
    assert_eq!(vehicle.tile, 4);
}

#[test]
fn test_spawn_outside_geometry_is_counted() {
    let mut junction = Junction::new(SimConfig {
        spawn_interval_secs: 0.0,
        ..seeded_config()
    });

    assert!(junction.spawn_vehicle(Road::East, Road::North, 99).is_err());
    assert_eq!(junction.stats.failed_spawns, 1);
    assert_eq!(junction.stats.total_spawned, 0);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let snapshot = |junction: &Junction| {
        junction
            .registry
            .iter()
            .map(|v| (v.id, v.origin, v.destination, v.tile))
            .collect::<Vec<_>>()
    };

    let mut first = Junction::new(seeded_config());
    let mut second = Junction::new(seeded_config());
    first.controller.toggle_all_for_road(Road::East);
    second.controller.toggle_all_for_road(Road::East);
    run(&mut first, 60);
    run(&mut second, 60);

    assert_eq!(snapshot(&first), snapshot(&second));
}

#[test]
fn test_invalid_delta_is_ignored() {
    let mut junction = Junction::new(seeded_config());
    junction.tick(1.0);
    let time = junction.time;
    let count = junction.registry.count();

    for delta in [f32::INFINITY, f32::NAN, -1.0] {
        junction.tick(delta);
    }

    assert_eq!(junction.time, time);
    assert_eq!(junction.registry.count(), count);
}
