//! Core types for the junction simulation
//!
//! Roads, turns and signal colors are closed enumerations. Everything that
//! indexes the signal grid goes through these so an out-of-range key can only
//! come from parsing external strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SimError;

/// One of the four approaches to the junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Road {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Road {
    pub const ALL: [Road; 4] = [Road::North, Road::East, Road::South, Road::West];

    /// Position of this road in the signal grid
    pub fn index(self) -> usize {
        match self {
            Road::North => 0,
            Road::East => 1,
            Road::South => 2,
            Road::West => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Road::North => 'N',
            Road::East => 'E',
            Road::South => 'S',
            Road::West => 'W',
        }
    }

    /// The road on the far side of the junction
    pub fn opposite(self) -> Road {
        match self {
            Road::North => Road::South,
            Road::East => Road::West,
            Road::South => Road::North,
            Road::West => Road::East,
        }
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Road {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Road::North),
            "E" => Ok(Road::East),
            "S" => Ok(Road::South),
            "W" => Ok(Road::West),
            _ => Err(SimError::InvalidKey(format!("road '{}'", s))),
        }
    }
}

/// The maneuver a vehicle makes relative to its approach road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turn {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "S")]
    Straight,
    #[serde(rename = "R")]
    Right,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Left, Turn::Straight, Turn::Right];

    pub fn index(self) -> usize {
        match self {
            Turn::Left => 0,
            Turn::Straight => 1,
            Turn::Right => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Turn::Left => 'L',
            Turn::Straight => 'S',
            Turn::Right => 'R',
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Turn {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Turn::Left),
            "S" => Ok(Turn::Straight),
            "R" => Ok(Turn::Right),
            _ => Err(SimError::InvalidKey(format!("turn '{}'", s))),
        }
    }
}

/// State of a single signal light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalColor {
    #[default]
    Red,
    Green,
}

impl SignalColor {
    pub fn flipped(self) -> SignalColor {
        match self {
            SignalColor::Red => SignalColor::Green,
            SignalColor::Green => SignalColor::Red,
        }
    }

    pub fn is_green(self) -> bool {
        self == SignalColor::Green
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SignalColor::Red => write!(f, "red"),
            SignalColor::Green => write!(f, "green"),
        }
    }
}

impl FromStr for SignalColor {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(SignalColor::Red),
            "green" => Ok(SignalColor::Green),
            _ => Err(SimError::InvalidKey(format!("color '{}'", s))),
        }
    }
}

/// Identifier handed out by the vehicle registry
///
/// Ids increase monotonically for the life of the registry and are never
/// reused, unless the counter is explicitly reset on an empty registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u64);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 2D point in the rendering collaborator's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lane carrying traffic toward the junction
pub const INBOUND_LANE: u32 = 0;

/// Lane carrying traffic away from the junction
pub const OUTBOUND_LANE: u32 = 1;

/// Vehicles past this tile have left the simulated area
pub const EXIT_TILE: u32 = 12;
