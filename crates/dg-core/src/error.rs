//! Error types

use thiserror::Error;

use crate::grid::GridPos;

/// Invalid generator configuration, detected before any carving starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: i64,
        value: i64,
    },

    #[error("room percent must be within 0.0..=1.0, got {0}")]
    RoomPercentOutOfRange(f32),

    #[error("{width}x{height} region cannot hold a {min_width}x{min_height} room")]
    RegionTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    #[error("offset {offset} leaves less than 2 floor cells across a {min_width}x{min_height} room")]
    OffsetTooLarge {
        offset: i32,
        min_width: i32,
        min_height: i32,
    },

    #[error("layout from {start} can reach {reach} cells out, past the edge of the grid")]
    OutOfGrid { start: GridPos, reach: i64 },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConfigError {
    /// Check `value >= min` for a named field
    pub(crate) fn check_min(field: &'static str, value: i64, min: i64) -> Result<(), ConfigError> {
        if value < min {
            return Err(ConfigError::BelowMinimum { field, min, value });
        }
        Ok(())
    }
}

/// Failure of a generation call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A programming-logic fault; the layout would be broken
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T, E = GenerationError> = core::result::Result<T, E>;
