//! Single iterated random walk

use log::debug;

use crate::config::WalkParameters;
use crate::dungeon::run_random_walk;
use crate::grid::GridPos;
use crate::rng::GenRng;

use super::Layout;

/// One organic cave grown from `start`
pub fn generate(walk: &WalkParameters, start: GridPos, rng: &mut GenRng) -> Layout {
    let floor = run_random_walk(walk, start, rng);
    debug!("simple walk from {}: {} floor cells", start, floor.len());
    Layout {
        floor,
        rooms: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_start() {
        let mut rng = GenRng::new(1);
        let layout = generate(&WalkParameters::default(), GridPos::new(4, 4), &mut rng);
        assert!(layout.floor.contains(GridPos::new(4, 4)));
        assert!(layout.rooms.is_empty());
    }
}
