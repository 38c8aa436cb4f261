use rand::{Rng, seq::IndexedRandom};

use crate::maze::{Direction, Grid};

/// Carves each row west to east as runs of horizontal corridor. When a run
/// closes, one of its cells is opened to the row above.
///
/// The top row has nothing above it, so it is never closed early and becomes one corridor.
pub fn sidewinder(grid: &mut Grid, rng: &mut impl Rng) {
    let size = grid.size();
    let mut run = Vec::with_capacity(size);

    for y in 0..size {
        for x in 0..size {
            let index = grid.index_of((x, y));
            run.push(index);

            let east = grid[index].neighbor(Direction::East);
            let has_north = grid[index].neighbor(Direction::North).is_some();
            let should_close = east.is_none() || (has_north && rng.random_bool(0.5));

            match east {
                Some(east) if !should_close => {
                    grid.link(index, east);
                }
                _ => {
                    let members = run
                        .iter()
                        .copied()
                        .filter(|&member| grid[member].neighbor(Direction::North).is_some())
                        .collect::<Vec<_>>();
                    if let Some(&member) = members.choose(rng) {
                        if let Some(north) = grid[member].neighbor(Direction::North) {
                            grid.link(member, north);
                        }
                    }
                    run.clear();
                }
            }
        }
    }
}
