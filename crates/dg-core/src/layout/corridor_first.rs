//! Corridors first, rooms grown at their ends
//!
//! 1. Chain corridors end to end and remember every endpoint
//! 2. Grow random-walk rooms at a sampled share of those endpoints
//! 3. Grow a room at every corridor dead end no room covers yet

use log::debug;

use crate::config::{CorridorFirstConfig, WalkParameters};
use crate::dungeon::{create_corridors, find_dead_ends, run_random_walk};
use crate::grid::{FloorSet, GridPos};
use crate::rng::GenRng;

use super::Layout;

pub fn generate(
    walk: &WalkParameters,
    corridors: &CorridorFirstConfig,
    start: GridPos,
    rng: &mut GenRng,
) -> Layout {
    let chain = create_corridors(start, corridors.corridor_count, corridors.corridor_length, rng);

    let mut room_floor = create_rooms(walk, &chain.potential_rooms, corridors.room_percent, rng);

    let dead_ends = find_dead_ends(&chain.floor);
    let dead_end_rooms = create_rooms_at_dead_ends(walk, &dead_ends, &mut room_floor, rng);

    debug!(
        "corridor first: {} corridor cells, {} endpoints, {} dead-end rooms, {} room cells",
        chain.floor.len(),
        chain.potential_rooms.len(),
        dead_end_rooms,
        room_floor.len()
    );

    let mut floor = chain.floor;
    floor.union_with(&room_floor);
    Layout {
        floor,
        rooms: Vec::new(),
    }
}

/// How many endpoints get a room, rounded half to even
pub fn rooms_to_create(potential: usize, room_percent: f32) -> usize {
    (potential as f32 * room_percent).round_ties_even() as usize
}

/// Random-walk rooms at a uniform sample of the potential positions
fn create_rooms(
    walk: &WalkParameters,
    potential_rooms: &FloorSet,
    room_percent: f32,
    rng: &mut GenRng,
) -> FloorSet {
    let count = rooms_to_create(potential_rooms.len(), room_percent);
    let chosen = rng.sample(&potential_rooms.to_vec(), count);

    let mut room_floor = FloorSet::new();
    for position in chosen {
        room_floor.union_with(&run_random_walk(walk, position, rng));
    }
    room_floor
}

/// Grow a room at each dead end outside `room_floor`; returns rooms grown
fn create_rooms_at_dead_ends(
    walk: &WalkParameters,
    dead_ends: &[GridPos],
    room_floor: &mut FloorSet,
    rng: &mut GenRng,
) -> usize {
    let mut grown = 0;
    for &position in dead_ends {
        if !room_floor.contains(position) {
            let room = run_random_walk(walk, position, rng);
            room_floor.union_with(&room);
            grown += 1;
        }
    }
    grown
}
