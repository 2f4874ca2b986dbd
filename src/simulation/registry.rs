//! Vehicle registry: spawning, per-tick movement, retirement and statistics
//!
//! The registry is the only owner of vehicles. Each tick it asks the movement
//! rules whether a vehicle's turn is green, then either steps the vehicle
//! forward or adds to its wait counter.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::BTreeMap;

use super::error::SimError;
use super::geometry::{CoordinateResolver, JunctionGeometry};
use super::motion::{OneTilePerTick, StepPolicy};
use super::movement;
use super::signal_state::SignalState;
use super::types::{Road, VehicleId, EXIT_TILE};
use super::vehicle::{Vehicle, VehiclePhase};

/// Live vehicles plus the collaborators needed to place and move them
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleId, Vehicle>,

    /// Next id to assign; starts at 1
    next_id: u64,

    resolver: Box<dyn CoordinateResolver>,

    step_policy: Box<dyn StepPolicy>,

    /// Optional seeded RNG for reproducible speeds
    rng: Option<StdRng>,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRegistry {
    fn new_internal(resolver: Box<dyn CoordinateResolver>, rng: Option<StdRng>) -> Self {
        Self {
            vehicles: BTreeMap::new(),
            next_id: 1,
            resolver,
            step_policy: Box::new(OneTilePerTick),
            rng,
        }
    }

    /// Registry on the default junction layout
    pub fn new() -> Self {
        Self::new_internal(Box::new(JunctionGeometry::default()), None)
    }

    pub fn with_resolver(resolver: impl CoordinateResolver + 'static) -> Self {
        Self::new_internal(Box::new(resolver), None)
    }

    /// Registry with a seeded RNG for reproducible simulations
    pub fn with_resolver_and_seed(resolver: impl CoordinateResolver + 'static, seed: u64) -> Self {
        Self::new_internal(Box::new(resolver), Some(StdRng::seed_from_u64(seed)))
    }

    /// Replace the motion rule applied to vehicles cleared to move
    pub fn set_step_policy(&mut self, policy: impl StepPolicy + 'static) {
        self.step_policy = Box::new(policy);
    }

    fn random_speed(&mut self) -> f32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(1.0..3.0),
            None => rand::rng().random_range(1.0..3.0),
        }
    }

    /// Place a new vehicle on `road` heading for `destination`
    ///
    /// Fails when `destination` is the starting road or when the resolver
    /// has no geometry for the starting cell. No id is consumed by a failed
    /// spawn.
    pub fn spawn(
        &mut self,
        destination: Road,
        road: Road,
        lane: u32,
        tile: u32,
    ) -> Result<&Vehicle, SimError> {
        if destination == road {
            warn!("Cannot spawn vehicle on road {} heading back to {}", road, destination);
            return Err(SimError::IllegalMovement { road });
        }
        let Some(position) = self.resolver.resolve(road, lane, tile) else {
            warn!(
                "Cannot spawn vehicle on road {} lane {} tile {}: no geometry",
                road, lane, tile
            );
            return Err(SimError::SpawnFailed { road, lane, tile });
        };

        let id = VehicleId(self.next_id);
        self.next_id += 1;
        let speed = self.random_speed();

        let vehicle = Vehicle::new(id, destination, road, lane, tile, position, speed);
        debug!(
            "Spawned vehicle {} on {} tile {} heading {}",
            id, road, tile, destination
        );
        let vehicle: &Vehicle = self.vehicles.entry(id).or_insert(vehicle);
        Ok(vehicle)
    }

    /// Advance every live vehicle by one tick against the given signals
    ///
    /// Vehicles still approaching the junction move only when their turn is
    /// green. Vehicles already on their destination road are past the
    /// signals and always move. A vehicle whose next cell has no geometry
    /// stays put and waits.
    pub fn tick(&mut self, signals: &SignalState, delta_secs: f32) {
        for vehicle in self.vehicles.values_mut() {
            let allowed = if vehicle.is_outbound() {
                true
            } else {
                match movement::is_movement_allowed(vehicle.road, vehicle.destination, signals) {
                    Ok(allowed) => allowed,
                    Err(e) => {
                        warn!("Vehicle {}: {}", vehicle.id, e);
                        false
                    }
                }
            };

            if !allowed {
                vehicle.mark_waiting(delta_secs);
                debug!(
                    "Vehicle {} waiting on {} tile {} ({}s)",
                    vehicle.id, vehicle.road, vehicle.tile, vehicle.wait_time
                );
                continue;
            }

            let next = self.step_policy.next_cell(vehicle, delta_secs);
            match self.resolver.resolve(next.road, next.lane, next.tile) {
                Some(position) => {
                    vehicle.mark_moving();
                    vehicle.road = next.road;
                    vehicle.lane = next.lane;
                    vehicle.tile = next.tile;
                    vehicle.position = position;
                }
                None => {
                    // Nowhere to go: held in place like a red light
                    vehicle.mark_waiting(delta_secs);
                    debug!(
                        "Vehicle {} cannot step to {} tile {}: no geometry",
                        vehicle.id, next.road, next.tile
                    );
                }
            }
        }
    }

    /// Move a vehicle to another road and tile, keeping its lane and destination
    ///
    /// Returns false for unknown ids or cells the resolver cannot place.
    pub fn relocate(&mut self, id: VehicleId, road: Road, tile: u32) -> bool {
        let Some(vehicle) = self.vehicles.get_mut(&id) else {
            return false;
        };
        match self.resolver.resolve(road, vehicle.lane, tile) {
            Some(position) => {
                vehicle.road = road;
                vehicle.tile = tile;
                vehicle.position = position;
                true
            }
            None => {
                warn!("Cannot relocate vehicle {} to {} tile {}", id, road, tile);
                false
            }
        }
    }

    pub fn remove(&mut self, id: VehicleId) -> Option<Vehicle> {
        self.vehicles.remove(&id)
    }

    pub fn clear_all(&mut self) {
        self.vehicles.clear();
    }

    /// Restart ids at 1
    ///
    /// Only meaningful on an empty registry; live vehicles would otherwise
    /// collide with new ids. Not checked here.
    pub fn reset_id_counter(&mut self) {
        self.next_id = 1;
    }

    /// Remove every vehicle past the exit tile and return them
    pub fn prune(&mut self) -> Vec<Vehicle> {
        let exited: Vec<VehicleId> = self
            .vehicles
            .values()
            .filter(|v| v.tile > EXIT_TILE)
            .map(|v| v.id)
            .collect();

        exited
            .into_iter()
            .filter_map(|id| self.vehicles.remove(&id))
            .map(|mut vehicle| {
                vehicle.phase = VehiclePhase::Exited;
                vehicle.moving = false;
                vehicle
            })
            .collect()
    }

    /// Set the moving flag without consulting the signals
    pub fn start(&mut self, id: VehicleId) -> bool {
        match self.vehicles.get_mut(&id) {
            Some(vehicle) => {
                vehicle.moving = true;
                vehicle.phase = VehiclePhase::Moving;
                true
            }
            None => false,
        }
    }

    pub fn stop(&mut self, id: VehicleId) -> bool {
        match self.vehicles.get_mut(&id) {
            Some(vehicle) => {
                vehicle.moving = false;
                vehicle.phase = VehiclePhase::Waiting;
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn moving_count(&self) -> usize {
        self.vehicles.values().filter(|v| v.moving).count()
    }

    /// Vehicles not currently moving, including ones not yet ticked
    pub fn waiting_count(&self) -> usize {
        self.vehicles.values().filter(|v| !v.moving).count()
    }

    pub fn total_wait_seconds(&self) -> u64 {
        self.vehicles.values().map(|v| u64::from(v.wait_time)).sum()
    }

    /// Mean wait across live vehicles, rounded to one decimal place
    pub fn average_wait_seconds(&self) -> f64 {
        if self.vehicles.is_empty() {
            return 0.0;
        }
        let average = self.total_wait_seconds() as f64 / self.vehicles.len() as f64;
        (average * 10.0).round() / 10.0
    }

    pub fn by_road(&self, road: Road) -> Vec<&Vehicle> {
        self.vehicles.values().filter(|v| v.road == road).collect()
    }

    pub fn by_id(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Live vehicles in id order
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }
}
