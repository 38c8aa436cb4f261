use rand::{Rng, seq::IndexedRandom};

use crate::maze::Grid;

/// Cells not yet part of the maze, with constant-time membership, removal and random pick.
struct Unvisited {
    cells: Vec<usize>,
    /// Position of each grid cell inside `cells`, `None` once removed.
    slots: Vec<Option<usize>>,
}

impl Unvisited {
    fn new(len: usize) -> Self {
        Unvisited {
            cells: (0..len).collect(),
            slots: (0..len).map(Some).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn contains(&self, index: usize) -> bool {
        self.slots[index].is_some()
    }

    fn choose(&self, rng: &mut impl Rng) -> Option<usize> {
        self.cells.choose(rng).copied()
    }

    fn remove(&mut self, index: usize) {
        let Some(slot) = self.slots[index].take() else {
            return;
        };
        self.cells.swap_remove(slot);
        if let Some(&moved) = self.cells.get(slot) {
            self.slots[moved] = Some(slot);
        }
    }
}

/// Loop-erased random walks from unvisited cells until each one hits the maze.
///
/// Like Aldous-Broder it yields a uniform spanning tree, but erasing loops keeps
/// every walk short once the maze covers a good part of the grid.
pub fn wilson(grid: &mut Grid, rng: &mut impl Rng) {
    let mut unvisited = Unvisited::new(grid.len());

    // The seed joins the maze without any link of its own.
    if let Some(seed) = unvisited.choose(rng) {
        unvisited.remove(seed);
    }

    while let Some(start) = unvisited.choose(rng) {
        let mut cell = start;
        let mut path = vec![start];

        while unvisited.contains(cell) {
            let neighbors = grid.neighbors(cell).collect::<Vec<_>>();
            let Some(&next) = neighbors.choose(rng) else {
                break;
            };
            cell = next;

            match path.iter().position(|&c| c == cell) {
                Some(position) => path.truncate(position + 1),
                None => path.push(cell),
            }
        }

        for pair in path.windows(2) {
            grid.link(pair[0], pair[1]);
            unvisited.remove(pair[0]);
        }
    }

    debug_assert!(unvisited.is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_unvisited_set_removal() {
        let mut set = Unvisited::new(4);
        set.remove(1);
        set.remove(1);
        assert!(!set.contains(1));
        assert!(set.contains(3));
        set.remove(3);
        set.remove(0);
        assert!(set.contains(2));
        assert_eq!(set.choose(&mut get_rng(Some(0))), Some(2));
        set.remove(2);
        assert!(set.is_empty());
    }
}
