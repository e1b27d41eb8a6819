//! Rendering collaborator
//!
//! The generator never draws anything itself. It hands the finished floor
//! and walls to a [`TileRenderer`]; [`TileCanvas`] is an in-memory one that
//! can print itself as ASCII.

use core::fmt;

use hashbrown::HashMap;

use crate::grid::{FloorSet, GridPos};
use crate::walls::WallArchetype;

/// Receiver of generated tiles
pub trait TileRenderer {
    /// Drop everything painted so far
    fn clear(&mut self);

    fn paint_floor(&mut self, floor: &FloorSet);

    /// Called once per wall cell; never with [`WallArchetype::None`]
    fn paint_wall(&mut self, position: GridPos, archetype: WallArchetype);
}

/// Recording renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCanvas {
    floor: FloorSet,
    walls: HashMap<GridPos, WallArchetype>,
}

impl TileCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor(&self) -> &FloorSet {
        &self.floor
    }

    pub fn wall_at(&self, pos: GridPos) -> Option<WallArchetype> {
        self.walls.get(&pos).copied()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floor.is_empty() && self.walls.is_empty()
    }

    /// Inclusive corners covering every painted tile
    fn extent(&self) -> Option<(GridPos, GridPos)> {
        let mut walls = self.walls.keys().copied();
        let init = match self.floor.extent() {
            Some(bounds) => bounds,
            None => {
                let first = walls.next()?;
                (first, first)
            }
        };
        Some(walls.fold(init, |(lo, hi), p| {
            (
                GridPos::new(lo.x.min(p.x), lo.y.min(p.y)),
                GridPos::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl TileRenderer for TileCanvas {
    fn clear(&mut self) {
        self.floor = FloorSet::new();
        self.walls.clear();
    }

    fn paint_floor(&mut self, floor: &FloorSet) {
        self.floor.union_with(floor);
    }

    fn paint_wall(&mut self, position: GridPos, archetype: WallArchetype) {
        self.walls.insert(position, archetype);
    }
}

/// Top row first, `.` for floor, wall glyphs for walls
impl fmt::Display for TileCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((lo, hi)) = self.extent() else {
            return Ok(());
        };
        for y in (lo.y..=hi.y).rev() {
            let row: String = (lo.x..=hi.x)
                .map(|x| {
                    let pos = GridPos::new(x, y);
                    if self.floor.contains(pos) {
                        '.'
                    } else {
                        self.wall_at(pos).map_or(' ', |w| w.glyph())
                    }
                })
                .collect();
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_and_clear() {
        let mut canvas = TileCanvas::new();
        let floor: FloorSet = [GridPos::ZERO].into_iter().collect();
        canvas.paint_floor(&floor);
        canvas.paint_wall(GridPos::new(0, 1), WallArchetype::Top);
        assert_eq!(canvas.floor().len(), 1);
        assert_eq!(canvas.wall_at(GridPos::new(0, 1)), Some(WallArchetype::Top));

        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_ascii_rows_top_first() {
        let mut canvas = TileCanvas::new();
        let floor: FloorSet = [GridPos::new(0, 0), GridPos::new(1, 0)].into_iter().collect();
        canvas.paint_floor(&floor);
        canvas.paint_wall(GridPos::new(0, 1), WallArchetype::Top);
        canvas.paint_wall(GridPos::new(1, 1), WallArchetype::Top);
        canvas.paint_wall(GridPos::new(0, -1), WallArchetype::Bottom);
        assert_eq!(canvas.to_string(), "--\n..\n-\n");
    }

    #[test]
    fn test_walls_only_canvas() {
        let mut canvas = TileCanvas::new();
        canvas.paint_wall(GridPos::new(2, 0), WallArchetype::Left);
        canvas.paint_wall(GridPos::new(0, 1), WallArchetype::Full);
        assert_eq!(canvas.to_string(), "#\n  |\n");
    }

    #[test]
    fn test_empty_canvas_prints_nothing() {
        assert_eq!(TileCanvas::new().to_string(), "");
    }
}
