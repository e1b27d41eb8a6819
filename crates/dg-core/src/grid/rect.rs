//! Axis-aligned room rectangles
//!
//! Rectangles are half-open: `x_min..x_max` by `y_min..y_max`.

use serde::{Deserialize, Serialize};

use super::GridPos;

/// Bounds of a room or of a region being partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomBounds {
    /// Lowest corner (inclusive)
    pub min: GridPos,
    pub width: i32,
    pub height: i32,
}

impl RoomBounds {
    pub const fn new(min: GridPos, width: i32, height: i32) -> Self {
        Self { min, width, height }
    }

    pub fn x_min(&self) -> i32 {
        self.min.x
    }

    pub fn y_min(&self) -> i32 {
        self.min.y
    }

    /// Exclusive upper x bound
    pub fn x_max(&self) -> i32 {
        self.min.x + self.width
    }

    /// Exclusive upper y bound
    pub fn y_max(&self) -> i32 {
        self.min.y + self.height
    }

    /// True if the rectangle covers at least one cell
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Geometric center rounded to the nearest cell, ties to even
    pub fn center(&self) -> GridPos {
        let cx = self.min.x as f64 + self.width as f64 / 2.0;
        let cy = self.min.y as f64 + self.height as f64 / 2.0;
        GridPos::new(cx.round_ties_even() as i32, cy.round_ties_even() as i32)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x_min() && pos.x < self.x_max() && pos.y >= self.y_min() && pos.y < self.y_max()
    }

    /// Check if this rectangle shares any cell with another
    pub fn intersects(&self, other: &RoomBounds) -> bool {
        self.x_min() < other.x_max()
            && other.x_min() < self.x_max()
            && self.y_min() < other.y_max()
            && other.y_min() < self.y_max()
    }

    /// Shrink by `offset` on every side
    ///
    /// The result may be invalid (no cells) when the offset is too large.
    pub fn inset(&self, offset: i32) -> RoomBounds {
        RoomBounds::new(
            self.min + GridPos::new(offset, offset),
            self.width - 2 * offset,
            self.height - 2 * offset,
        )
    }

    /// Every cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.width.max(0)).flat_map(move |col| {
            (0..self.height.max(0)).map(move |row| self.min + GridPos::new(col, row))
        })
    }
}
