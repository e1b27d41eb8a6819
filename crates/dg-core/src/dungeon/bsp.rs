//! Binary space partitioning into room rectangles

use std::collections::VecDeque;

use log::trace;

use crate::error::{GenerationError, Result};
use crate::grid::{GridPos, RoomBounds};
use crate::rng::GenRng;

/// Split `region` until no piece can be halved without dropping below
/// `min_width` x `min_height`, and return the pieces
///
/// Regions are processed breadth-first. When both axes can be split a coin
/// decides which one is tried first. Split offsets are uniform over the
/// range that keeps both halves at or above the minimum, so the leaves
/// always tile `region` exactly.
pub fn partition(
    region: RoomBounds,
    min_width: i32,
    min_height: i32,
    rng: &mut GenRng,
) -> Result<Vec<RoomBounds>> {
    if min_width < 1 || min_height < 1 {
        return Err(GenerationError::Invariant(format!(
            "BSP minimum {}x{} must be positive",
            min_width, min_height
        )));
    }

    if region.min.x.checked_add(region.width).is_none()
        || region.min.y.checked_add(region.height).is_none()
    {
        return Err(GenerationError::Invariant(format!(
            "BSP region {:?} extends past the edge of the grid",
            region
        )));
    }

    let mut queue = VecDeque::from([region]);
    let mut leaves = Vec::new();

    while let Some(room) = queue.pop_front() {
        let can_split_h = room.height / 2 >= min_height;
        let can_split_v = room.width / 2 >= min_width;

        let horizontal_first = rng.coin();
        let split = match (horizontal_first, can_split_h, can_split_v) {
            (true, true, _) | (false, true, false) => Some(split_horizontally(room, min_height, rng)),
            (false, _, true) | (true, false, true) => Some(split_vertically(room, min_width, rng)),
            _ => None,
        };

        match split {
            Some((a, b)) => {
                queue.push_back(a);
                queue.push_back(b);
            }
            None => {
                if !room.is_valid() || room.width < min_width || room.height < min_height {
                    return Err(GenerationError::Invariant(format!(
                        "BSP produced a {}x{} leaf below the {}x{} minimum",
                        room.width, room.height, min_width, min_height
                    )));
                }
                leaves.push(room);
            }
        }
    }

    trace!("partitioned {:?} into {} leaves", region, leaves.len());
    Ok(leaves)
}

/// Cut across the y axis into lower and upper halves
fn split_horizontally(room: RoomBounds, min_height: i32, rng: &mut GenRng) -> (RoomBounds, RoomBounds) {
    let y_split = rng.range_inclusive(min_height, room.height - min_height);
    let lower = RoomBounds::new(room.min, room.width, y_split);
    let upper = RoomBounds::new(
        room.min + GridPos::new(0, y_split),
        room.width,
        room.height - y_split,
    );
    (lower, upper)
}

/// Cut across the x axis into left and right halves
fn split_vertically(room: RoomBounds, min_width: i32, rng: &mut GenRng) -> (RoomBounds, RoomBounds) {
    let x_split = rng.range_inclusive(min_width, room.width - min_width);
    let left = RoomBounds::new(room.min, x_split, room.height);
    let right = RoomBounds::new(
        room.min + GridPos::new(x_split, 0),
        room.width - x_split,
        room.height,
    );
    (left, right)
}
