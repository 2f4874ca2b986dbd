//! Simulation settings
//!
//! Plain structs with defaults; the binary fills them from command line
//! arguments.

use super::types::EXIT_TILE;

/// Layout handed to the default coordinate resolver
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    pub center_x: f32,
    pub center_y: f32,
    /// Length of one tile along the road
    pub tile_size: f32,
    /// Side of the square junction box
    pub junction_size: f32,
    pub lane_width: f32,
    /// Highest tile index that still resolves to a position
    pub last_tile: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            center_y: 400.0,
            tile_size: 30.0,
            junction_size: 80.0,
            lane_width: 30.0,
            // One tile past the exit threshold so leaving vehicles can be pruned
            last_tile: EXIT_TILE + 1,
        }
    }
}

/// Settings for a headless junction run
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seconds of simulated time per tick
    pub delta_secs: f32,
    pub ticks: u32,
    /// Seconds between automatic spawns; 0 disables spawning
    pub spawn_interval_secs: f32,
    pub max_vehicles: usize,
    /// Tile new vehicles appear on
    pub spawn_tile: u32,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
    pub geometry: GeometryConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_secs: 0.5,
            ticks: 200,
            spawn_interval_secs: 2.0,
            max_vehicles: 24,
            spawn_tile: 9,
            seed: None,
            geometry: GeometryConfig::default(),
        }
    }
}
