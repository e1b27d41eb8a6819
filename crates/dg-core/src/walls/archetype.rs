//! Wall tile archetypes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Directional wall tile category for a cell bordering the floor
///
/// Names describe the tile, not the neighbour: a `Top` wall sits on the top
/// edge of a floor area, with floor directly below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WallArchetype {
    /// Borders the floor but matches no table
    #[default]
    None = 0,
    Top = 1,
    Right = 2,
    Left = 3,
    Bottom = 4,
    Full = 5,
    InnerCornerDownLeft = 6,
    InnerCornerDownRight = 7,
    DiagonalCornerDownLeft = 8,
    DiagonalCornerDownRight = 9,
    DiagonalCornerUpLeft = 10,
    DiagonalCornerUpRight = 11,
}

impl WallArchetype {
    /// True for every archetype a renderer should draw
    pub const fn is_wall(&self) -> bool {
        !matches!(self, WallArchetype::None)
    }

    /// Single-character debug glyph
    pub const fn glyph(&self) -> char {
        match self {
            WallArchetype::None => ' ',
            WallArchetype::Top | WallArchetype::Bottom => '-',
            WallArchetype::Right | WallArchetype::Left => '|',
            WallArchetype::Full => '#',
            WallArchetype::InnerCornerDownLeft | WallArchetype::InnerCornerDownRight => '+',
            WallArchetype::DiagonalCornerDownRight | WallArchetype::DiagonalCornerUpLeft => '/',
            WallArchetype::DiagonalCornerDownLeft | WallArchetype::DiagonalCornerUpRight => '\\',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_none_is_not_wall() {
        assert!(!WallArchetype::None.is_wall());
        assert_eq!(WallArchetype::iter().filter(|a| a.is_wall()).count(), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(WallArchetype::InnerCornerDownLeft.to_string(), "InnerCornerDownLeft");
    }

    #[test]
    fn test_glyphs_are_visible_for_walls() {
        for archetype in WallArchetype::iter().filter(|a| a.is_wall()) {
            assert_ne!(archetype.glyph(), ' ', "{archetype} has no glyph");
        }
    }
}
