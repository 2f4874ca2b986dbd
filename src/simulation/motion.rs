//! How far a vehicle travels on a tick it is allowed to move

use super::types::{Road, OUTBOUND_LANE};
use super::vehicle::Vehicle;

/// A (road, lane, tile) position on the junction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub road: Road,
    pub lane: u32,
    pub tile: u32,
}

/// Decides the next cell for a vehicle that has been cleared to move
pub trait StepPolicy {
    fn next_cell(&self, vehicle: &Vehicle, delta_secs: f32) -> Cell;
}

/// Advance exactly one tile per permitted tick
///
/// Approaching vehicles count down to tile 0, then cross onto their
/// destination road at tile 0 in the outbound lane. Outbound vehicles count
/// up until they leave.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneTilePerTick;

impl StepPolicy for OneTilePerTick {
    fn next_cell(&self, vehicle: &Vehicle, _delta_secs: f32) -> Cell {
        if vehicle.is_outbound() {
            return Cell {
                road: vehicle.road,
                lane: OUTBOUND_LANE,
                tile: vehicle.tile + 1,
            };
        }

        match vehicle.tile {
            0 => Cell {
                road: vehicle.destination,
                lane: OUTBOUND_LANE,
                tile: 0,
            },
            tile => Cell {
                road: vehicle.road,
                lane: vehicle.lane,
                tile: tile - 1,
            },
        }
    }
}
