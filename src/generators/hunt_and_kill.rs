use rand::{Rng, seq::IndexedRandom};

use crate::maze::Grid;

/// Random walk through unvisited cells; when the walk is stuck, hunt in
/// row-major order for the first unvisited cell touching the maze and resume from it.
///
/// Uses the cells' `visited` flag and leaves it set on every cell.
pub fn hunt_and_kill(grid: &mut Grid, rng: &mut impl Rng) {
    let mut current = grid.random_cell(rng);
    grid[current].set_visited(true);

    loop {
        let unvisited = grid
            .neighbors(current)
            .filter(|&n| !grid[n].is_visited())
            .collect::<Vec<_>>();

        // Walk
        if let Some(&next) = unvisited.choose(rng) {
            grid.link(current, next);
            grid[next].set_visited(true);
            current = next;
            continue;
        }

        // Hunt
        match hunt(grid, rng) {
            Some(found) => current = found,
            None => break,
        }
    }
}

/// Joins the first unvisited cell next to the maze to a random visited
/// neighbor. Returns `None` once every cell is visited.
fn hunt(grid: &mut Grid, rng: &mut impl Rng) -> Option<usize> {
    for index in 0..grid.len() {
        if grid[index].is_visited() {
            continue;
        }

        let visited = grid
            .neighbors(index)
            .filter(|&n| grid[n].is_visited())
            .collect::<Vec<_>>();

        if let Some(&neighbor) = visited.choose(rng) {
            grid[index].set_visited(true);
            grid.link(index, neighbor);
            return Some(index);
        }
    }
    None
}
