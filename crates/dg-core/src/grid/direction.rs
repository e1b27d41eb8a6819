//! Direction tables
//!
//! The order of every table is load-bearing: neighbour bitmasks are built by
//! walking these arrays, and the wall lookup tables assume exactly this
//! order (first entry = most significant bit).

use super::GridPos;
use crate::rng::GenRng;

pub const UP: GridPos = GridPos::new(0, 1);
pub const RIGHT: GridPos = GridPos::new(1, 0);
pub const DOWN: GridPos = GridPos::new(0, -1);
pub const LEFT: GridPos = GridPos::new(-1, 0);

pub const UP_RIGHT: GridPos = GridPos::new(1, 1);
pub const DOWN_RIGHT: GridPos = GridPos::new(1, -1);
pub const DOWN_LEFT: GridPos = GridPos::new(-1, -1);
pub const UP_LEFT: GridPos = GridPos::new(-1, 1);

/// Cardinal directions: up, right, down, left
pub const CARDINAL: [GridPos; 4] = [UP, RIGHT, DOWN, LEFT];

/// Diagonal directions, clockwise from up-right
pub const DIAGONAL: [GridPos; 4] = [UP_RIGHT, DOWN_RIGHT, DOWN_LEFT, UP_LEFT];

/// All eight neighbours, clockwise from up
pub const EIGHT: [GridPos; 8] = [UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT];

/// Uniformly random cardinal direction
pub fn random_cardinal(rng: &mut GenRng) -> GridPos {
    CARDINAL[rng.below(CARDINAL.len())]
}
