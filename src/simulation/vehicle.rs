//! A single simulated vehicle
//!
//! Vehicles are owned by the registry and only change through it.

use serde::Serialize;

use super::types::{Position, Road, VehicleId};

const WAIT_EPSILON: f32 = 1e-4;

/// Lifecycle of a vehicle: `Spawned -> (Waiting <-> Moving)* -> Exited`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VehiclePhase {
    /// Placed on the road, not yet evaluated by a tick
    Spawned,
    /// Held at a red light
    Waiting,
    /// Cleared to move on the last tick
    Moving,
    /// Past the exit tile and removed from the registry
    Exited,
}

/// A car travelling through the junction
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Road the vehicle was spawned on
    pub origin: Road,
    /// Road the vehicle is heading for
    pub destination: Road,
    /// Road the vehicle is currently on
    pub road: Road,
    pub lane: u32,
    pub tile: u32,
    pub position: Position,
    /// Cruising speed, drawn uniformly from [1, 3)
    pub speed: f32,
    pub moving: bool,
    /// Whole seconds spent waiting at a red light since last moving
    pub wait_time: u32,
    pub phase: VehiclePhase,
    /// Sub-second remainder not yet counted in `wait_time`
    #[serde(skip)]
    wait_carry: f32,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        destination: Road,
        road: Road,
        lane: u32,
        tile: u32,
        position: Position,
        speed: f32,
    ) -> Self {
        Self {
            id,
            origin: road,
            destination,
            road,
            lane,
            tile,
            position,
            speed,
            moving: false,
            wait_time: 0,
            phase: VehiclePhase::Spawned,
            wait_carry: 0.0,
        }
    }

    /// Already on the destination road, heading away from the junction
    pub fn is_outbound(&self) -> bool {
        self.road == self.destination
    }

    pub(crate) fn mark_moving(&mut self) {
        self.moving = true;
        self.wait_time = 0;
        self.wait_carry = 0.0;
        self.phase = VehiclePhase::Moving;
    }

    /// Hold the vehicle and add the elapsed time to its wait counter
    pub(crate) fn mark_waiting(&mut self, delta_secs: f32) {
        self.moving = false;
        self.phase = VehiclePhase::Waiting;

        self.wait_carry += delta_secs.max(0.0);
        // Tolerance keeps ten 0.1s ticks from summing to 0.999..
        let whole = (self.wait_carry + WAIT_EPSILON).floor();
        self.wait_time = self.wait_time.saturating_add(whole as u32);
        self.wait_carry = (self.wait_carry - whole).max(0.0);
    }
}
