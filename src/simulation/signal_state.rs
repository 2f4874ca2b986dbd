//! The authoritative record of every signal light at the junction
//!
//! The grid is a fixed 4x3 array indexed by road and turn, so every cell
//! exists from construction onward and there is nothing to look up or miss.

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::types::{Road, SignalColor, Turn};

/// Color of every (road, turn) light
///
/// There is no mutual-exclusion rule between cells: any combination of
/// greens is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalState {
    lights: [[SignalColor; 3]; 4],
}

impl SignalState {
    /// All twelve lights start red
    pub fn new() -> Self {
        Self {
            lights: [[SignalColor::Red; 3]; 4],
        }
    }

    pub fn get(&self, road: Road, turn: Turn) -> SignalColor {
        self.lights[road.index()][turn.index()]
    }

    /// Strict lookup for string keys coming from outside the crate
    pub fn get_by_key(&self, road: &str, turn: &str) -> Result<SignalColor, SimError> {
        let road: Road = road.parse()?;
        let turn: Turn = turn.parse()?;
        Ok(self.get(road, turn))
    }

    pub fn set(&mut self, road: Road, turn: Turn, color: SignalColor) {
        self.lights[road.index()][turn.index()] = color;
    }

    pub fn reset_all(&mut self) {
        self.lights = [[SignalColor::Red; 3]; 4];
    }

    /// True if any of the road's three lights is green
    pub fn road_has_green(&self, road: Road) -> bool {
        self.lights[road.index()].iter().any(|color| color.is_green())
    }

    /// Number of green lights across the whole junction
    pub fn green_count(&self) -> usize {
        self.lights
            .iter()
            .flatten()
            .filter(|color| color.is_green())
            .count()
    }

    pub fn to_grid(&self) -> SignalGrid {
        let lights = |road: Road| RoadLights {
            left: self.get(road, Turn::Left),
            straight: self.get(road, Turn::Straight),
            right: self.get(road, Turn::Right),
        };
        SignalGrid {
            north: lights(Road::North),
            south: lights(Road::South),
            east: lights(Road::East),
            west: lights(Road::West),
        }
    }

    pub fn from_grid(grid: &SignalGrid) -> Self {
        let mut state = Self::new();
        for road in Road::ALL {
            let lights = grid.road(road);
            state.set(road, Turn::Left, lights.left);
            state.set(road, Turn::Straight, lights.straight);
            state.set(road, Turn::Right, lights.right);
        }
        state
    }
}

/// The three lights of one road, in wire shape `{L, S, R}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadLights {
    #[serde(rename = "L")]
    pub left: SignalColor,
    #[serde(rename = "S")]
    pub straight: SignalColor,
    #[serde(rename = "R")]
    pub right: SignalColor,
}

/// Wire shape of the full grid: `{N: {L,S,R}, S: .., E: .., W: ..}`
///
/// Deserializing requires all four roads and all three turns, so a parsed
/// grid always maps onto a fully populated `SignalState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalGrid {
    #[serde(rename = "N")]
    pub north: RoadLights,
    #[serde(rename = "S")]
    pub south: RoadLights,
    #[serde(rename = "E")]
    pub east: RoadLights,
    #[serde(rename = "W")]
    pub west: RoadLights,
}

impl SignalGrid {
    pub fn road(&self, road: Road) -> &RoadLights {
        match road {
            Road::North => &self.north,
            Road::East => &self.east,
            Road::South => &self.south,
            Road::West => &self.west,
        }
    }
}
