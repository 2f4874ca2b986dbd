//! The junction that ties signals and vehicles together
//!
//! This is the entry point for running the simulation headless. Operator
//! input goes straight to `controller`; each tick reads whatever the grid
//! holds at that moment.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::config::SimConfig;
use super::controller::SignalController;
use super::geometry::JunctionGeometry;
use super::registry::VehicleRegistry;
use super::types::{Road, Turn, VehicleId, INBOUND_LANE};

/// Running totals for a junction session
#[derive(Debug, Clone, Default)]
pub struct JunctionStats {
    pub total_spawned: u64,
    pub total_exited: u64,
    /// Spawn attempts rejected by the coordinate resolver
    pub failed_spawns: u64,
}

/// A four-way junction with operator-controlled signals and random traffic
pub struct Junction {
    pub controller: SignalController,

    pub registry: VehicleRegistry,

    pub stats: JunctionStats,

    /// Simulation time in seconds
    pub time: f32,

    /// Time since the last automatic spawn
    spawn_timer: f32,

    config: SimConfig,

    /// Optional seeded RNG for reproducible traffic
    rng: Option<StdRng>,
}

impl Default for Junction {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Junction {
    pub fn new(config: SimConfig) -> Self {
        let geometry = JunctionGeometry::new(config.geometry.clone());
        let (registry, rng) = match config.seed {
            Some(seed) => (
                VehicleRegistry::with_resolver_and_seed(geometry, seed),
                // Offset so route choice and speeds draw from different streams
                Some(StdRng::seed_from_u64(seed.wrapping_add(1))),
            ),
            None => (VehicleRegistry::with_resolver(geometry), None),
        };
        Self {
            controller: SignalController::new(),
            registry,
            stats: JunctionStats::default(),
            time: 0.0,
            spawn_timer: 0.0,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Pick two distinct roads for a new vehicle's origin and destination
    fn random_route(&mut self) -> Option<(Road, Road)> {
        let origin = match &mut self.rng {
            Some(rng) => *Road::ALL.choose(rng)?,
            None => *Road::ALL.choose(&mut rand::rng())?,
        };
        let destinations: Vec<Road> = Road::ALL.into_iter().filter(|&r| r != origin).collect();
        let destination = match &mut self.rng {
            Some(rng) => *destinations.choose(rng)?,
            None => *destinations.choose(&mut rand::rng())?,
        };
        Some((origin, destination))
    }

    /// Spawn a vehicle on a random approach, heading for a different road
    pub fn spawn_random_vehicle(&mut self) -> Result<VehicleId> {
        let (origin, destination) = self
            .random_route()
            .context("No route available for a new vehicle")?;
        self.spawn_vehicle(destination, origin, self.config.spawn_tile)
    }

    /// Spawn a vehicle in the inbound lane of `road`
    pub fn spawn_vehicle(&mut self, destination: Road, road: Road, tile: u32) -> Result<VehicleId> {
        match self.registry.spawn(destination, road, INBOUND_LANE, tile) {
            Ok(vehicle) => {
                let id = vehicle.id;
                self.stats.total_spawned += 1;
                Ok(id)
            }
            Err(e) => {
                self.stats.failed_spawns += 1;
                Err(anyhow::Error::new(e).context("Failed to spawn vehicle"))
            }
        }
    }

    /// Advance the junction by one tick
    ///
    /// Spawns traffic on the configured interval, moves or holds every
    /// vehicle against the current signals, then prunes vehicles that have
    /// left the area. Negative or non-finite deltas are ignored.
    pub fn tick(&mut self, delta_secs: f32) {
        if !(delta_secs.is_finite() && delta_secs >= 0.0) {
            warn!("Ignoring tick with invalid delta {}", delta_secs);
            return;
        }
        self.time += delta_secs;

        if self.config.spawn_interval_secs > 0.0 {
            self.spawn_timer += delta_secs;
            while self.spawn_timer >= self.config.spawn_interval_secs {
                self.spawn_timer -= self.config.spawn_interval_secs;
                if self.registry.count() >= self.config.max_vehicles {
                    debug!("Vehicle limit {} reached, skipping spawn", self.config.max_vehicles);
                    continue;
                }
                if let Err(e) = self.spawn_random_vehicle() {
                    debug!("{:#}", e);
                }
            }
        }

        self.registry.tick(self.controller.state(), delta_secs);

        for vehicle in self.registry.prune() {
            self.stats.total_exited += 1;
            debug!(
                "Vehicle {} exited on road {} ({} -> {})",
                vehicle.id, vehicle.road, vehicle.origin, vehicle.destination
            );
        }
    }

    /// Log the signal grid and vehicle statistics
    pub fn log_summary(&self) {
        info!("=== Junction Summary ===");
        info!("Time: {:.2}s", self.time);
        for road in Road::ALL {
            let lights: Vec<String> = Turn::ALL
                .iter()
                .map(|&turn| format!("{}={}", turn, self.controller.get(road, turn)))
                .collect();
            info!(
                "  Road {}: {} (vehicles on road: {})",
                road,
                lights.join(" "),
                self.registry.by_road(road).len()
            );
        }
        info!("Total vehicles spawned: {}", self.stats.total_spawned);
        info!("Total vehicles exited: {}", self.stats.total_exited);
        info!("Active vehicles: {}", self.registry.count());
        info!(
            "Moving: {}, Waiting: {}",
            self.registry.moving_count(),
            self.registry.waiting_count()
        );
        info!("Total wait: {}s", self.registry.total_wait_seconds());
        info!("Average wait: {:.1}s", self.registry.average_wait_seconds());
    }
}
