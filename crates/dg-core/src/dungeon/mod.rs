//! Carving primitives
//!
//! Random walks, BSP partitioning, corridors and dead-end detection. Every
//! function is pure apart from advancing the RNG it is given.

mod bsp;
mod corridor;
mod dead_end;
mod walk;

pub use bsp::partition;
pub use corridor::{
    CorridorChain, connect_from, connect_rooms, create_corridors, create_l_corridor,
    find_closest_point_to,
};
pub use dead_end::find_dead_ends;
pub use walk::{random_walk_corridor, run_random_walk, walk};
