//! Generator configuration
//!
//! Every value is read once at the start of a generation call. Defaults
//! match the stock parameters of the level editor presets.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumIter};

use crate::error::ConfigError;
use crate::grid::{GridPos, RoomBounds};

/// Random walk tuning shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkParameters {
    /// Number of walks unioned together
    pub iterations: usize,
    /// Steps per walk
    pub walk_length: usize,
    /// Restart each walk from a random cell already carved
    pub start_randomly_each_iteration: bool,
}

impl Default for WalkParameters {
    fn default() -> Self {
        Self {
            iterations: 10,
            walk_length: 10,
            start_randomly_each_iteration: true,
        }
    }
}

impl WalkParameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_min("iterations", self.iterations as i64, 1)?;
        ConfigError::check_min("walk_length", self.walk_length as i64, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorFirstConfig {
    pub corridor_length: usize,
    pub corridor_count: usize,
    /// Share of corridor endpoints that grow a room
    pub room_percent: f32,
}

impl Default for CorridorFirstConfig {
    fn default() -> Self {
        Self {
            corridor_length: 14,
            corridor_count: 5,
            room_percent: 0.8,
        }
    }
}

impl CorridorFirstConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_min("corridor_length", self.corridor_length as i64, 1)?;
        ConfigError::check_min("corridor_count", self.corridor_count as i64, 1)?;
        if !(0.0..=1.0).contains(&self.room_percent) {
            return Err(ConfigError::RoomPercentOutOfRange(self.room_percent));
        }
        Ok(())
    }
}

/// Narrowest room interior, in cells, that always contains its leaf center
///
/// Centers round half to even, so a one-cell interior can miss its center
/// and be left cut off from the corridors.
pub const MIN_ROOM_INTERIOR: i64 = 2;

/// Cells beyond the carved area touched by wall classification
const WALL_MARGIN: i64 = 2;

/// Which cells of a random-walk room survive clipping to its BSP leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ClipPolicy {
    /// Same inset rectangle a simple room fills
    #[default]
    Inset,
    /// `x_min+offset ..= x_max-offset` by `y_min-offset ..= y_max-offset`,
    /// kept so old seeds reproduce old layouts
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomFirstConfig {
    pub min_room_width: i32,
    pub min_room_height: i32,
    pub dungeon_width: i32,
    pub dungeon_height: i32,
    /// Gap kept between a room's floor and its leaf edge
    pub offset: i32,
    pub random_walk_rooms: bool,
    pub clip: ClipPolicy,
}

impl Default for RoomFirstConfig {
    fn default() -> Self {
        Self {
            min_room_width: 4,
            min_room_height: 4,
            dungeon_width: 20,
            dungeon_height: 20,
            offset: 1,
            random_walk_rooms: false,
            clip: ClipPolicy::Inset,
        }
    }
}

impl RoomFirstConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_min("min_room_width", self.min_room_width as i64, 1)?;
        ConfigError::check_min("min_room_height", self.min_room_height as i64, 1)?;
        ConfigError::check_min("offset", self.offset as i64, 0)?;

        if self.dungeon_width < self.min_room_width || self.dungeon_height < self.min_room_height {
            return Err(ConfigError::RegionTooSmall {
                width: self.dungeon_width,
                height: self.dungeon_height,
                min_width: self.min_room_width,
                min_height: self.min_room_height,
            });
        }

        let interior_w = self.min_room_width as i64 - 2 * self.offset as i64;
        let interior_h = self.min_room_height as i64 - 2 * self.offset as i64;
        if interior_w < MIN_ROOM_INTERIOR || interior_h < MIN_ROOM_INTERIOR {
            return Err(ConfigError::OffsetTooLarge {
                offset: self.offset,
                min_width: self.min_room_width,
                min_height: self.min_room_height,
            });
        }
        Ok(())
    }

    /// The region partitioned into rooms
    pub fn region(&self, start: GridPos) -> RoomBounds {
        RoomBounds::new(start, self.dungeon_width, self.dungeon_height)
    }
}

/// Layout strategy discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    SimpleWalk,
    CorridorFirst,
    RoomFirst,
}

/// Strategy selection with its own parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    #[default]
    SimpleWalk,
    CorridorFirst(CorridorFirstConfig),
    RoomFirst(RoomFirstConfig),
}

impl StrategyConfig {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::SimpleWalk => StrategyKind::SimpleWalk,
            StrategyConfig::CorridorFirst(_) => StrategyKind::CorridorFirst,
            StrategyConfig::RoomFirst(_) => StrategyKind::RoomFirst,
        }
    }
}

/// Everything one generation call needs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Walk origin, corridor seed, or lower corner of the room region
    pub start: GridPos,
    /// Fixed seed for reproducible layouts; entropy when absent
    pub seed: Option<u64>,
    pub walk: WalkParameters,
    pub strategy: StrategyConfig,
}

impl GeneratorConfig {
    pub fn simple_walk(walk: WalkParameters) -> Self {
        Self {
            walk,
            ..Self::default()
        }
    }

    pub fn corridor_first(walk: WalkParameters, corridors: CorridorFirstConfig) -> Self {
        Self {
            walk,
            strategy: StrategyConfig::CorridorFirst(corridors),
            ..Self::default()
        }
    }

    pub fn room_first(walk: WalkParameters, rooms: RoomFirstConfig) -> Self {
        Self {
            walk,
            strategy: StrategyConfig::RoomFirst(rooms),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: GridPos) -> Self {
        self.start = start;
        self
    }

    /// Reject any value that would yield an empty or degenerate layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.walk.validate()?;
        match &self.strategy {
            StrategyConfig::SimpleWalk => {}
            StrategyConfig::CorridorFirst(c) => c.validate()?,
            StrategyConfig::RoomFirst(r) => r.validate()?,
        }

        let reach = self.reach();
        let fits = |c: i32| {
            let c = c as i64;
            c.saturating_sub(reach) >= i32::MIN as i64 && c.saturating_add(reach) <= i32::MAX as i64
        };
        if !fits(self.start.x) || !fits(self.start.y) {
            return Err(ConfigError::OutOfGrid {
                start: self.start,
                reach,
            });
        }
        Ok(())
    }

    /// Farthest any carved or classified cell can land from `start`
    pub fn reach(&self) -> i64 {
        let walk = steps(self.walk.iterations).saturating_mul(steps(self.walk.walk_length));
        let carved = match &self.strategy {
            StrategyConfig::SimpleWalk => walk,
            StrategyConfig::CorridorFirst(c) => steps(c.corridor_count)
                .saturating_mul(steps(c.corridor_length))
                .saturating_add(walk),
            StrategyConfig::RoomFirst(r) => {
                let span = (r.dungeon_width as i64).max(r.dungeon_height as i64);
                if r.random_walk_rooms {
                    span.saturating_add(walk)
                } else {
                    span
                }
            }
        };
        carved.saturating_add(WALL_MARGIN)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_json(&contents)
    }
}

fn steps(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(
            GeneratorConfig::corridor_first(WalkParameters::default(), CorridorFirstConfig::default())
                .validate()
                .is_ok()
        );
        assert!(
            GeneratorConfig::room_first(WalkParameters::default(), RoomFirstConfig::default())
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let walk = WalkParameters {
            iterations: 0,
            ..WalkParameters::default()
        };
        assert!(matches!(
            GeneratorConfig::simple_walk(walk).validate(),
            Err(ConfigError::BelowMinimum {
                field: "iterations",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_walk_length_rejected() {
        let walk = WalkParameters {
            walk_length: 0,
            ..WalkParameters::default()
        };
        assert!(matches!(
            walk.validate(),
            Err(ConfigError::BelowMinimum {
                field: "walk_length",
                ..
            })
        ));
    }

    #[test]
    fn test_corridor_limits() {
        let zero_count = CorridorFirstConfig {
            corridor_count: 0,
            ..CorridorFirstConfig::default()
        };
        assert!(zero_count.validate().is_err());

        let bad_percent = CorridorFirstConfig {
            room_percent: 1.2,
            ..CorridorFirstConfig::default()
        };
        assert_eq!(
            bad_percent.validate(),
            Err(ConfigError::RoomPercentOutOfRange(1.2))
        );

        let nan = CorridorFirstConfig {
            room_percent: f32::NAN,
            ..CorridorFirstConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_region_too_small() {
        let rooms = RoomFirstConfig {
            dungeon_width: 3,
            ..RoomFirstConfig::default()
        };
        assert!(matches!(
            rooms.validate(),
            Err(ConfigError::RegionTooSmall { width: 3, .. })
        ));
    }

    #[test]
    fn test_offset_limits() {
        let swallowed = RoomFirstConfig {
            offset: 2,
            ..RoomFirstConfig::default()
        };
        assert!(matches!(
            swallowed.validate(),
            Err(ConfigError::OffsetTooLarge { offset: 2, .. })
        ));

        let negative = RoomFirstConfig {
            offset: -1,
            ..RoomFirstConfig::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_one_cell_room_interior_rejected() {
        // 3x3 rooms inset by 1 keep a single cell that can miss the center
        let rooms = RoomFirstConfig {
            min_room_width: 3,
            min_room_height: 3,
            dungeon_width: 6,
            dungeon_height: 3,
            ..RoomFirstConfig::default()
        };
        assert!(matches!(
            rooms.validate(),
            Err(ConfigError::OffsetTooLarge { offset: 1, .. })
        ));
        assert!(RoomFirstConfig { offset: 0, ..rooms }.validate().is_ok());

        let single = RoomFirstConfig {
            min_room_width: 1,
            min_room_height: 1,
            offset: 0,
            ..RoomFirstConfig::default()
        };
        assert!(single.validate().is_err());
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let rooms = RoomFirstConfig {
            offset: i32::MAX,
            ..RoomFirstConfig::default()
        };
        assert!(matches!(
            rooms.validate(),
            Err(ConfigError::OffsetTooLarge { .. })
        ));
    }

    #[test]
    fn test_start_near_grid_edge() {
        let walk = WalkParameters::default();
        let room_first = GeneratorConfig::room_first(walk, RoomFirstConfig::default());
        assert_eq!(room_first.reach(), 22);
        assert!(matches!(
            room_first.with_start(GridPos::new(i32::MAX - 10, 0)).validate(),
            Err(ConfigError::OutOfGrid { reach: 22, .. })
        ));
        assert!(room_first.with_start(GridPos::new(i32::MAX - 22, 0)).validate().is_ok());

        let simple = GeneratorConfig::simple_walk(walk);
        assert_eq!(simple.reach(), 102);
        assert!(simple.with_start(GridPos::new(0, i32::MIN + 50)).validate().is_err());
        assert!(simple.with_start(GridPos::new(0, i32::MIN + 102)).validate().is_ok());

        let corridors = GeneratorConfig::corridor_first(walk, CorridorFirstConfig::default());
        assert_eq!(corridors.reach(), 14 * 5 + 100 + 2);
    }

    #[test]
    fn test_reach_saturates() {
        let walk = WalkParameters {
            iterations: usize::MAX,
            walk_length: usize::MAX,
            start_randomly_each_iteration: true,
        };
        let config = GeneratorConfig::simple_walk(walk);
        assert_eq!(config.reach(), i64::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfGrid { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GeneratorConfig::room_first(
            WalkParameters::default(),
            RoomFirstConfig {
                random_walk_rooms: true,
                clip: ClipPolicy::Legacy,
                ..RoomFirstConfig::default()
            },
        )
        .with_seed(99)
        .with_start(GridPos::new(-5, 3));

        let json = config.to_json().unwrap();
        let parsed = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_partial_fields_use_defaults() {
        let json = r#"{
            "seed": 7,
            "strategy": { "kind": "corridor_first", "corridor_count": 3 }
        }"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.walk, WalkParameters::default());
        match config.strategy {
            StrategyConfig::CorridorFirst(c) => {
                assert_eq!(c.corridor_count, 3);
                assert_eq!(c.corridor_length, 14);
            }
            other => panic!("unexpected strategy {other:?}"),
        }
    }

    #[test]
    fn test_json_invalid_values_rejected() {
        let json = r#"{ "walk": { "iterations": 0 } }"#;
        assert!(matches!(
            GeneratorConfig::from_json(json),
            Err(ConfigError::BelowMinimum { .. })
        ));
        assert!(matches!(
            GeneratorConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorConfig::load_from_file(Path::new("/nonexistent/dungeon.json"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_strategy_kind() {
        assert_eq!(StrategyConfig::SimpleWalk.kind(), StrategyKind::SimpleWalk);
        assert_eq!(
            StrategyConfig::RoomFirst(RoomFirstConfig::default()).kind(),
            StrategyKind::RoomFirst
        );
        assert_eq!(StrategyKind::CorridorFirst.to_string(), "CorridorFirst");
    }
}
