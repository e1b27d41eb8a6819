//! dg-core: Procedural 2D tile dungeon generation
//!
//! Carves floor on an unbounded integer grid with one of three strategies
//! (a plain random walk, corridors grown into rooms, or BSP rooms joined by
//! corridors), then classifies every bordering cell into a directional wall
//! archetype from neighbour bitmasks.
//!
//! Generation is deterministic for a given seed and never touches a
//! renderer until the whole dungeon has been built.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod walls;

mod rng;

pub use config::{
    ClipPolicy, CorridorFirstConfig, GeneratorConfig, RoomFirstConfig, StrategyConfig,
    StrategyKind, WalkParameters,
};
pub use error::{ConfigError, GenerationError, Result};
pub use grid::{FloorSet, GridPos, RoomBounds};
pub use layout::{Dungeon, DungeonGenerator, Layout, generate};
pub use render::{TileCanvas, TileRenderer};
pub use rng::GenRng;
pub use walls::{WallArchetype, WallMap};
