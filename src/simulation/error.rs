//! Error taxonomy for the junction core

use thiserror::Error;

use super::types::Road;

/// Failures surfaced by the signal and vehicle components
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    /// A road, turn or color outside its enumeration
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Origin and destination are the same road, so no turn exists
    #[error("illegal movement: origin and destination are both {road}")]
    IllegalMovement { road: Road },
    /// The coordinate resolver has no geometry for the requested cell
    #[error("spawn failed: no coordinates for road {road} lane {lane} tile {tile}")]
    SpawnFailed { road: Road, lane: u32, tile: u32 },
}
