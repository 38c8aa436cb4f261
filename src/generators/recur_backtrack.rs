use rand::{Rng, seq::IndexedRandom};

use crate::maze::Grid;

/// Depth-first carve with an explicit stack, backing up whenever the top cell
/// has no neighbor left without links.
pub fn recursive_backtrack(grid: &mut Grid, rng: &mut impl Rng) {
    // Initialize the stack with a random starting point
    let mut stack = vec![grid.random_cell(rng)];

    while let Some(&cell) = stack.last() {
        let neighbors = grid
            .neighbors(cell)
            .filter(|&n| grid[n].links().is_empty())
            .collect::<Vec<_>>();

        match neighbors.choose(rng) {
            Some(&neighbor) => {
                grid.link(cell, neighbor);
                // Carve further in that neighbor's direction
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }
}
