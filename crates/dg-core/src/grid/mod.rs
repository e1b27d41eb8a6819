//! Grid primitives
//!
//! Coordinates, direction tables, floor sets and room rectangles.

mod direction;
mod floor;
mod pos;
mod rect;

pub use direction::{
    CARDINAL, DIAGONAL, DOWN, DOWN_LEFT, DOWN_RIGHT, EIGHT, LEFT, RIGHT, UP, UP_LEFT, UP_RIGHT,
    random_cardinal,
};
pub use floor::FloorSet;
pub use pos::GridPos;
pub use rect::RoomBounds;
