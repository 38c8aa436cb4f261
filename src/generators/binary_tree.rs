use rand::{Rng, seq::IndexedRandom};

use crate::maze::{Direction, Grid};

/// Links every cell to its north or east neighbor, picked at random.
///
/// Cells on the top row can only go east and cells on the right column can only
/// go north, so both edges always end up as unbroken corridors.
pub fn binary_tree(grid: &mut Grid, rng: &mut impl Rng) {
    for index in 0..grid.len() {
        let candidates = [Direction::North, Direction::East]
            .into_iter()
            .filter_map(|direction| grid[index].neighbor(direction))
            .collect::<Vec<_>>();

        if let Some(&neighbor) = candidates.choose(rng) {
            grid.link(index, neighbor);
        }
    }
}
