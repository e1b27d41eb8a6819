//! Layout strategies and the generator entry points
//!
//! Each strategy produces a [`Layout`]; [`generate`] validates the
//! configuration, runs the selected strategy and classifies walls around
//! the result. Nothing reaches a renderer until generation has finished.

pub mod corridor_first;
pub mod room_first;
pub mod simple_walk;

use log::{debug, info};

use crate::config::{GeneratorConfig, StrategyConfig, StrategyKind};
use crate::error::{GenerationError, Result};
use crate::grid::{FloorSet, GridPos, RoomBounds};
use crate::render::TileRenderer;
use crate::rng::GenRng;
use crate::walls::{WallArchetype, WallMap, classify};

/// Floor carved by one strategy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub floor: FloorSet,
    /// BSP leaves; empty for strategies without explicit rooms
    pub rooms: Vec<RoomBounds>,
}

/// A finished dungeon: floor, typed walls and the seed that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    pub strategy: StrategyKind,
    /// Seed of the stream that built this dungeon. It replays the dungeon
    /// only if the stream was fresh when generation started.
    pub seed: u64,
    pub floor: FloorSet,
    pub walls: WallMap,
    pub rooms: Vec<RoomBounds>,
}

impl Dungeon {
    /// Wall cells with a real archetype
    pub fn wall_count(&self) -> usize {
        self.walls.values().filter(|w| w.is_wall()).count()
    }

    pub fn wall_at(&self, pos: GridPos) -> Option<WallArchetype> {
        self.walls.get(&pos).copied()
    }

    /// Walls sorted by position, [`WallArchetype::None`] skipped
    pub fn sorted_walls(&self) -> Vec<(GridPos, WallArchetype)> {
        let mut walls: Vec<_> = self
            .walls
            .iter()
            .filter(|(_, w)| w.is_wall())
            .map(|(p, w)| (*p, *w))
            .collect();
        walls.sort_unstable_by_key(|(p, _)| *p);
        walls
    }

    /// Clear the renderer, then paint floor and every typed wall
    pub fn paint(&self, renderer: &mut dyn TileRenderer) {
        renderer.clear();
        renderer.paint_floor(&self.floor);
        for (pos, archetype) in self.sorted_walls() {
            renderer.paint_wall(pos, archetype);
        }
    }
}

/// Run one full generation with the given stream
///
/// [`Dungeon::seed`] is copied from `rng`. A stream that was already
/// advanced produces a dungeon its seed alone cannot reproduce; use
/// [`DungeonGenerator::generate`] for replayable results.
pub fn generate(config: &GeneratorConfig, rng: &mut GenRng) -> Result<Dungeon> {
    config.validate()?;

    let layout = match &config.strategy {
        StrategyConfig::SimpleWalk => simple_walk::generate(&config.walk, config.start, rng),
        StrategyConfig::CorridorFirst(corridors) => {
            corridor_first::generate(&config.walk, corridors, config.start, rng)
        }
        StrategyConfig::RoomFirst(rooms) => {
            room_first::generate(&config.walk, rooms, config.start, rng)?
        }
    };

    if layout.floor.is_empty() {
        return Err(GenerationError::Invariant(format!(
            "{} produced no floor",
            config.strategy.kind()
        )));
    }

    let walls = classify(&layout.floor);
    debug!(
        "{}: {} floor cells, {} wall candidates",
        config.strategy.kind(),
        layout.floor.len(),
        walls.len()
    );

    Ok(Dungeon {
        strategy: config.strategy.kind(),
        seed: rng.seed(),
        floor: layout.floor,
        walls,
        rooms: layout.rooms,
    })
}

/// Validated configuration plus convenience entry points
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with the configured seed, or fresh entropy when none is set
    pub fn generate(&self) -> Result<Dungeon> {
        let mut rng = GenRng::from_seed_or_entropy(self.config.seed);
        info!(
            "generating {} dungeon with seed {}",
            self.config.strategy.kind(),
            rng.seed()
        );
        self.generate_with(&mut rng)
    }

    pub fn generate_with(&self, rng: &mut GenRng) -> Result<Dungeon> {
        generate(&self.config, rng)
    }

    /// Generate, then paint onto `renderer`. On error the renderer is untouched.
    pub fn generate_into(&self, renderer: &mut dyn TileRenderer) -> Result<Dungeon> {
        let dungeon = self.generate()?;
        dungeon.paint(renderer);
        Ok(dungeon)
    }
}
