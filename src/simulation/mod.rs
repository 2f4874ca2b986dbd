//! Standalone junction simulation module
//!
//! This module contains the signal grid, the movement rules that read it, and
//! the vehicle registry they gate. Nothing here draws or talks to the network;
//! geometry and status export sit behind small boundary types.

mod config;
mod controller;
mod error;
mod geometry;
mod junction;
mod motion;
mod movement;
mod registry;
mod signal_state;
mod types;
mod vehicle;

pub use config::{GeometryConfig, SimConfig};
pub use controller::{SignalController, SignalHit, SignalSnapshot};
pub use error::SimError;
pub use geometry::{CoordinateResolver, JunctionGeometry};
pub use junction::{Junction, JunctionStats};
pub use motion::{Cell, OneTilePerTick, StepPolicy};
pub use movement::{is_movement_allowed, turn_for};
pub use registry::VehicleRegistry;
pub use signal_state::{RoadLights, SignalGrid, SignalState};
pub use types::{
    Position, Road, SignalColor, Turn, VehicleId, EXIT_TILE, INBOUND_LANE, OUTBOUND_LANE,
};
pub use vehicle::{Vehicle, VehiclePhase};
