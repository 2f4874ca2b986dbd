//! Coordinate resolution for vehicle positions
//!
//! The core never draws anything. It only asks a resolver whether a
//! (road, lane, tile) cell exists and where it sits, and refuses spawns or
//! moves onto cells the resolver cannot place.

use super::config::GeometryConfig;
use super::types::{Position, Road, INBOUND_LANE, OUTBOUND_LANE};

/// Boundary contract with the rendering collaborator
pub trait CoordinateResolver {
    /// Pixel position of a cell, or `None` if the cell has no geometry
    fn resolve(&self, road: Road, lane: u32, tile: u32) -> Option<Position>;
}

/// Square four-way junction with two lanes per road
///
/// Tile 0 touches the junction box and tiles count outward. Traffic keeps
/// left, so the inbound lane sits on the driver's left of the road centre
/// line as seen approaching the junction.
#[derive(Debug, Clone, Default)]
pub struct JunctionGeometry {
    pub config: GeometryConfig,
}

impl JunctionGeometry {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }
}

impl CoordinateResolver for JunctionGeometry {
    fn resolve(&self, road: Road, lane: u32, tile: u32) -> Option<Position> {
        if tile > self.config.last_tile {
            return None;
        }
        let side = match lane {
            INBOUND_LANE => 1.0,
            OUTBOUND_LANE => -1.0,
            _ => return None,
        };

        let c = &self.config;
        let half_junction = c.junction_size / 2.0;
        let lane_offset = c.lane_width / 2.0;
        // Distance from the junction centre to the middle of the tile
        let along = half_junction + (tile as f32 + 0.5) * c.tile_size;

        let position = match road {
            Road::North => Position::new(c.center_x + side * lane_offset, c.center_y - along),
            Road::South => Position::new(c.center_x - side * lane_offset, c.center_y + along),
            Road::East => Position::new(c.center_x + along, c.center_y + side * lane_offset),
            Road::West => Position::new(c.center_x - along, c.center_y - side * lane_offset),
        };
        Some(position)
    }
}

impl<F> CoordinateResolver for F
where
    F: Fn(Road, u32, u32) -> Option<Position>,
{
    fn resolve(&self, road: Road, lane: u32, tile: u32) -> Option<Position> {
        self(road, lane, tile)
    }
}
