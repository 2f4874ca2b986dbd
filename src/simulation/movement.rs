//! Movement rules: which turn a vehicle needs and whether it may take it
//!
//! Traffic keeps to the left. Seen from any approach, the road one step
//! clockwise is a left turn, the opposite road is straight on, and the road
//! one step counter-clockwise is a right turn.

use super::error::SimError;
use super::signal_state::SignalState;
use super::types::{Road, Turn};

/// Resolve the turn needed to travel from `origin` onto `destination`
pub fn turn_for(origin: Road, destination: Road) -> Result<Turn, SimError> {
    use Road::*;
    use Turn::*;

    let turn = match (origin, destination) {
        (North, East) => Left,
        (North, South) => Straight,
        (North, West) => Right,
        (East, South) => Left,
        (East, West) => Straight,
        (East, North) => Right,
        (South, West) => Left,
        (South, North) => Straight,
        (South, East) => Right,
        (West, North) => Left,
        (West, East) => Straight,
        (West, South) => Right,
        (road, _) => return Err(SimError::IllegalMovement { road }),
    };
    Ok(turn)
}

/// True if the light governing `origin -> destination` is green
pub fn is_movement_allowed(
    origin: Road,
    destination: Road,
    signals: &SignalState,
) -> Result<bool, SimError> {
    let turn = turn_for(origin, destination)?;
    Ok(signals.get(origin, turn).is_green())
}

