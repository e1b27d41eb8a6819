//! Wall classification
//!
//! Turns a floor set into typed wall tiles using neighbour bitmasks.

mod archetype;
mod classify;
pub mod tables;

pub use archetype::WallArchetype;
pub use classify::{WallMap, classify, find_walls_in_directions, neighbour_mask};
