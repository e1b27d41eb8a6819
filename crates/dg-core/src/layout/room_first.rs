//! BSP rooms joined by nearest-neighbour corridors

use log::debug;

use crate::config::{ClipPolicy, RoomFirstConfig, WalkParameters};
use crate::dungeon::{connect_rooms, partition, run_random_walk};
use crate::error::Result;
use crate::grid::{FloorSet, GridPos, RoomBounds};
use crate::rng::GenRng;

use super::Layout;

pub fn generate(
    walk: &WalkParameters,
    rooms: &RoomFirstConfig,
    start: GridPos,
    rng: &mut GenRng,
) -> Result<Layout> {
    let leaves = partition(
        rooms.region(start),
        rooms.min_room_width,
        rooms.min_room_height,
        rng,
    )?;

    let mut floor = if rooms.random_walk_rooms {
        create_random_walk_rooms(walk, &leaves, rooms.offset, rooms.clip, rng)
    } else {
        create_simple_rooms(&leaves, rooms.offset)
    };

    let centers: Vec<GridPos> = leaves.iter().map(RoomBounds::center).collect();
    let corridors = connect_rooms(&centers, rng)?;

    debug!(
        "room first: {} rooms, {} room cells, {} corridor cells",
        leaves.len(),
        floor.len(),
        corridors.len()
    );

    floor.union_with(&corridors);
    Ok(Layout {
        floor,
        rooms: leaves,
    })
}

/// Solid rectangles, each leaf shrunk by `offset` on every side
pub fn create_simple_rooms(leaves: &[RoomBounds], offset: i32) -> FloorSet {
    leaves
        .iter()
        .flat_map(|room| room.inset(offset).cells().collect::<Vec<_>>())
        .collect()
}

/// Random walks from each leaf center, clipped to the leaf
pub fn create_random_walk_rooms(
    walk: &WalkParameters,
    leaves: &[RoomBounds],
    offset: i32,
    clip: ClipPolicy,
    rng: &mut GenRng,
) -> FloorSet {
    let mut floor = FloorSet::new();
    for room in leaves {
        let room_floor = run_random_walk(walk, room.center(), rng);
        floor.extend(
            room_floor
                .into_iter()
                .filter(|&pos| keeps(room, offset, clip, pos)),
        );
    }
    floor
}

fn keeps(room: &RoomBounds, offset: i32, clip: ClipPolicy, pos: GridPos) -> bool {
    match clip {
        ClipPolicy::Inset => room.inset(offset).contains(pos),
        ClipPolicy::Legacy => {
            pos.x >= room.x_min() + offset
                && pos.x <= room.x_max() - offset
                && pos.y >= room.y_min() - offset
                && pos.y <= room.y_max() - offset
        }
    }
}
