//! Corridor generation
//!
//! Two patterns:
//! 1. Chained corridors, each starting where the previous one ended
//! 2. Nearest-neighbour chains of L-shaped corridors between room centers

use log::trace;

use crate::error::{GenerationError, Result};
use crate::grid::{DOWN, FloorSet, GridPos, LEFT, RIGHT, UP};
use crate::rng::GenRng;

use super::walk::random_walk_corridor;

/// Floor carved by a corridor chain and the endpoints rooms may grow from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorridorChain {
    pub floor: FloorSet,
    /// The seed plus the end cell of every corridor
    pub potential_rooms: FloorSet,
}

/// Carve `count` corridors of `length` steps, end to end, from `start`
pub fn create_corridors(start: GridPos, count: usize, length: usize, rng: &mut GenRng) -> CorridorChain {
    let mut chain = CorridorChain::default();
    let mut current = start;
    chain.potential_rooms.insert(current);

    for _ in 0..count {
        let corridor = random_walk_corridor(current, length, rng);
        if let Some(&end) = corridor.last() {
            current = end;
        }
        chain.potential_rooms.insert(current);
        chain.floor.extend(corridor);
    }

    trace!(
        "{} corridors from {}: {} cells, {} endpoints",
        count,
        start,
        chain.floor.len(),
        chain.potential_rooms.len()
    );
    chain
}

/// Connect every center, starting from a random one
pub fn connect_rooms(centers: &[GridPos], rng: &mut GenRng) -> Result<FloorSet> {
    if centers.is_empty() {
        return Ok(FloorSet::new());
    }
    let start = rng.below(centers.len());
    connect_from(centers, start)
}

/// Connect every center as one nearest-neighbour path from `centers[start]`
///
/// From the current center, hop to the closest center not yet visited
/// (Euclidean distance, first in list order on ties) and dig an L-shaped
/// corridor to it. `n` centers yield `n - 1` corridors. This is a greedy
/// path, not a spanning tree.
pub fn connect_from(centers: &[GridPos], start: usize) -> Result<FloorSet> {
    let mut corridors = FloorSet::new();
    if centers.is_empty() {
        return Ok(corridors);
    }
    if start >= centers.len() {
        return Err(GenerationError::Invariant(format!(
            "start index {} out of range for {} room centers",
            start,
            centers.len()
        )));
    }

    let mut remaining = centers.to_vec();
    let mut current = remaining.remove(start);

    while !remaining.is_empty() {
        let idx = find_closest_point_to(current, &remaining).ok_or_else(|| {
            GenerationError::Invariant("no room center left to connect".to_string())
        })?;
        let closest = remaining.remove(idx);
        corridors.extend(create_l_corridor(current, closest));
        current = closest;
    }

    Ok(corridors)
}

/// Index of the center closest to `from`; earliest wins ties
pub fn find_closest_point_to(from: GridPos, centers: &[GridPos]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, &c) in centers.iter().enumerate() {
        let d = from.distance_squared(c);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Cells of a corridor that first matches rows, then columns
///
/// Both endpoints are included.
pub fn create_l_corridor(from: GridPos, to: GridPos) -> Vec<GridPos> {
    let mut corridor = vec![from];
    let mut position = from;

    while position.y != to.y {
        position += if to.y > position.y { UP } else { DOWN };
        corridor.push(position);
    }
    while position.x != to.x {
        position += if to.x > position.x { RIGHT } else { LEFT };
        corridor.push(position);
    }
    corridor
}
