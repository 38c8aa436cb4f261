use rand::{Rng, seq::IndexedRandom};

use crate::maze::Grid;

/// Random walk that links every cell the first time it is entered.
///
/// Produces a uniform spanning tree, but the walk has no step bound and slows
/// down badly on large grids once few cells are left unvisited.
pub fn aldous_broder(grid: &mut Grid, rng: &mut impl Rng) {
    let mut current = grid.random_cell(rng);
    let mut remaining = grid.len() - 1;

    while remaining > 0 {
        let neighbors = grid.neighbors(current).collect::<Vec<_>>();
        let Some(&next) = neighbors.choose(rng) else {
            break;
        };

        if grid[next].links().is_empty() {
            grid.link(current, next);
            remaining -= 1;
        }
        current = next;
    }
}
