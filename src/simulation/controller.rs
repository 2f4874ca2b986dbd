//! Operator-facing control surface for the junction signals
//!
//! The rendering side owns where each light is drawn and turns a click into
//! a `SignalHit`; the controller only knows which light to flip.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::movement;
use super::signal_state::{SignalGrid, SignalState};
use super::types::{Road, SignalColor, Turn};

/// A single light picked out by the rendering collaborator's hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalHit {
    pub road: Road,
    pub turn: Turn,
}

/// Point-in-time export of the signal grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSnapshot {
    pub timestamp: DateTime<Utc>,
    pub signals: SignalGrid,
}

/// Wraps the junction's `SignalState` and applies operator input to it
#[derive(Debug, Clone, Default)]
pub struct SignalController {
    state: SignalState,
}

impl SignalController {
    pub fn new() -> Self {
        Self {
            state: SignalState::new(),
        }
    }

    /// Read-only view of the underlying grid
    pub fn state(&self) -> &SignalState {
        &self.state
    }

    pub fn get(&self, road: Road, turn: Turn) -> SignalColor {
        self.state.get(road, turn)
    }

    /// Flip one light, leaving every other light untouched
    pub fn toggle(&mut self, road: Road, turn: Turn) -> SignalColor {
        let color = self.state.get(road, turn).flipped();
        self.state.set(road, turn, color);
        info!("Signal {}-{} toggled to {}", road, turn, color);
        color
    }

    /// Flip each of the road's three lights independently
    ///
    /// A road showing `L=green, S=red, R=red` ends up `L=red, S=green,
    /// R=green`; the lights are not forced to a common color.
    pub fn toggle_all_for_road(&mut self, road: Road) {
        for turn in Turn::ALL {
            let color = self.state.get(road, turn).flipped();
            self.state.set(road, turn, color);
        }
        info!("All signals on road {} toggled", road);
    }

    pub fn set(&mut self, road: Road, turn: Turn, color: SignalColor) {
        self.state.set(road, turn, color);
        debug!("Signal {}-{} set to {}", road, turn, color);
    }

    /// Lenient absolute set for partially validated external input
    ///
    /// Any key outside its enumeration makes this a no-op. Returns whether
    /// the light was written.
    pub fn set_light_raw(&mut self, road: &str, turn: &str, color: &str) -> bool {
        match (road.parse(), turn.parse(), color.parse()) {
            (Ok(road), Ok(turn), Ok(color)) => {
                self.set(road, turn, color);
                true
            }
            _ => {
                debug!("Ignoring signal update {}-{} = {}", road, turn, color);
                false
            }
        }
    }

    pub fn reset_all(&mut self) {
        self.state.reset_all();
        info!("All traffic signals reset to red");
    }

    /// Toggle the light a hit test resolved to, if any
    pub fn handle_signal_hit(&mut self, hit: Option<SignalHit>) -> bool {
        match hit {
            Some(SignalHit { road, turn }) => {
                self.toggle(road, turn);
                true
            }
            None => false,
        }
    }

    /// Coarse road-level color: green when any turn on the road is green
    pub fn road_signal(&self, road: Road) -> SignalColor {
        if self.state.road_has_green(road) {
            SignalColor::Green
        } else {
            SignalColor::Red
        }
    }

    /// Movement check against the controller's own grid
    pub fn is_movement_allowed(&self, origin: Road, destination: Road) -> Result<bool, SimError> {
        movement::is_movement_allowed(origin, destination, &self.state)
    }

    pub fn status_snapshot(&self) -> SignalSnapshot {
        SignalSnapshot {
            timestamp: Utc::now(),
            signals: self.state.to_grid(),
        }
    }
}
