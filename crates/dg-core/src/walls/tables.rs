//! Neighbour bitmask lookup tables
//!
//! Masks are built by testing the direction tables in order, first
//! direction as the most significant bit:
//! - 4-direction: up, right, down, left (bits 3..0)
//! - 8-direction: up, up-right, right, down-right, down, down-left, left,
//!   up-left (bits 7..0)
//!
//! A set bit means that neighbour is floor. The member lists are literal
//! data; changing one changes how walls tile.

use super::WallArchetype;

pub const WALL_TOP: &[u8] = &[
    0b1111, 0b0110, 0b0011, 0b0010, 0b1010, 0b1100, 0b1110, 0b1011, 0b0111,
];

pub const WALL_SIDE_LEFT: &[u8] = &[0b0100];

pub const WALL_SIDE_RIGHT: &[u8] = &[0b0001];

pub const WALL_BOTTOM: &[u8] = &[0b1000];

pub const WALL_INNER_CORNER_DOWN_LEFT: &[u8] = &[
    0b11110001, 0b11100000, 0b11110000, 0b11100001, 0b10100000, 0b01010001, 0b11010001,
    0b01100001, 0b11010000, 0b01110001, 0b00010001, 0b10110001, 0b10100001, 0b10010000,
    0b00110001, 0b10110000, 0b00100001, 0b10010001,
];

pub const WALL_INNER_CORNER_DOWN_RIGHT: &[u8] = &[
    0b11000111, 0b11000011, 0b10000011, 0b10000111, 0b10000010, 0b01000101, 0b11000101,
    0b01000011, 0b10000101, 0b01000111, 0b01000100, 0b11000110, 0b11000010, 0b10000100,
    0b01000110, 0b10000110, 0b11000100, 0b01000010,
];

pub const WALL_DIAGONAL_CORNER_DOWN_LEFT: &[u8] = &[0b01000000];

pub const WALL_DIAGONAL_CORNER_DOWN_RIGHT: &[u8] = &[0b00000001];

pub const WALL_DIAGONAL_CORNER_UP_LEFT: &[u8] = &[0b00010000, 0b01010000];

pub const WALL_DIAGONAL_CORNER_UP_RIGHT: &[u8] = &[0b00000100, 0b00000101];

pub const WALL_FULL_EIGHT_DIRECTIONS: &[u8] = &[
    0b00010100, 0b11100100, 0b10010011, 0b01110100, 0b00010111, 0b00010110, 0b00110100,
    0b00010101, 0b01010100, 0b00010010, 0b00100100, 0b00010011, 0b01100100, 0b10010111,
    0b11110100, 0b10010110, 0b10110100, 0b11100101, 0b11010011, 0b11110101, 0b11010111,
    0b01110101, 0b01010111, 0b01100101, 0b01010011, 0b01010010, 0b00100101, 0b00110101,
    0b01010110, 0b11010101, 0b11010100, 0b10010101,
];

pub const WALL_BOTTOM_EIGHT_DIRECTIONS: &[u8] = &[0b01000001];

/// 4-direction tables in lookup precedence
pub const CARDINAL_PRECEDENCE: [(&[u8], WallArchetype); 4] = [
    (WALL_TOP, WallArchetype::Top),
    (WALL_SIDE_RIGHT, WallArchetype::Right),
    (WALL_SIDE_LEFT, WallArchetype::Left),
    (WALL_BOTTOM, WallArchetype::Bottom),
];

/// 8-direction tables in lookup precedence
pub const EIGHT_PRECEDENCE: [(&[u8], WallArchetype); 8] = [
    (WALL_INNER_CORNER_DOWN_LEFT, WallArchetype::InnerCornerDownLeft),
    (WALL_INNER_CORNER_DOWN_RIGHT, WallArchetype::InnerCornerDownRight),
    (WALL_DIAGONAL_CORNER_DOWN_LEFT, WallArchetype::DiagonalCornerDownLeft),
    (WALL_DIAGONAL_CORNER_DOWN_RIGHT, WallArchetype::DiagonalCornerDownRight),
    (WALL_DIAGONAL_CORNER_UP_RIGHT, WallArchetype::DiagonalCornerUpRight),
    (WALL_DIAGONAL_CORNER_UP_LEFT, WallArchetype::DiagonalCornerUpLeft),
    (WALL_FULL_EIGHT_DIRECTIONS, WallArchetype::Full),
    (WALL_BOTTOM_EIGHT_DIRECTIONS, WallArchetype::Bottom),
];

fn lookup(mask: u8, tables: &[(&[u8], WallArchetype)]) -> Option<WallArchetype> {
    tables
        .iter()
        .find(|(members, _)| members.contains(&mask))
        .map(|&(_, archetype)| archetype)
}

/// Archetype for a 4-direction mask, first matching table wins
pub fn lookup_cardinal(mask: u8) -> Option<WallArchetype> {
    lookup(mask, &CARDINAL_PRECEDENCE)
}

/// Archetype for an 8-direction mask, first matching table wins
pub fn lookup_eight(mask: u8) -> Option<WallArchetype> {
    lookup(mask, &EIGHT_PRECEDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_masks_fit_in_four_bits() {
        for (members, archetype) in CARDINAL_PRECEDENCE {
            assert!(members.iter().all(|m| *m < 16), "{archetype} has a wide mask");
        }
    }

    #[test]
    fn test_cardinal_tables_disjoint() {
        for i in 0..CARDINAL_PRECEDENCE.len() {
            for j in i + 1..CARDINAL_PRECEDENCE.len() {
                let (a, _) = CARDINAL_PRECEDENCE[i];
                let (b, _) = CARDINAL_PRECEDENCE[j];
                assert!(a.iter().all(|m| !b.contains(m)));
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(WALL_TOP.len(), 9);
        assert_eq!(WALL_INNER_CORNER_DOWN_LEFT.len(), 18);
        assert_eq!(WALL_INNER_CORNER_DOWN_RIGHT.len(), 18);
        assert_eq!(WALL_FULL_EIGHT_DIRECTIONS.len(), 32);
    }

    #[test]
    fn test_cardinal_lookup() {
        // floor below only
        assert_eq!(lookup_cardinal(0b0010), Some(WallArchetype::Top));
        // floor above only
        assert_eq!(lookup_cardinal(0b1000), Some(WallArchetype::Bottom));
        // floor to the left only
        assert_eq!(lookup_cardinal(0b0001), Some(WallArchetype::Right));
        // floor to the right only
        assert_eq!(lookup_cardinal(0b0100), Some(WallArchetype::Left));
        // floor left and right
        assert_eq!(lookup_cardinal(0b0101), None);
        assert_eq!(lookup_cardinal(0), None);
    }

    #[test]
    fn test_eight_lookup() {
        assert_eq!(lookup_eight(0b01000000), Some(WallArchetype::DiagonalCornerDownLeft));
        assert_eq!(lookup_eight(0b00000001), Some(WallArchetype::DiagonalCornerDownRight));
        assert_eq!(lookup_eight(0b00000101), Some(WallArchetype::DiagonalCornerUpRight));
        assert_eq!(lookup_eight(0b01010000), Some(WallArchetype::DiagonalCornerUpLeft));
        assert_eq!(lookup_eight(0b11110000), Some(WallArchetype::InnerCornerDownLeft));
        assert_eq!(lookup_eight(0b11000111), Some(WallArchetype::InnerCornerDownRight));
        assert_eq!(lookup_eight(0b00010100), Some(WallArchetype::Full));
        assert_eq!(lookup_eight(0b01000001), Some(WallArchetype::Bottom));
        assert_eq!(lookup_eight(0b00011100), None);
    }
}
