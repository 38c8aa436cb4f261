use std::collections::VecDeque;

use rand::Rng;

use super::{Cell, Coord, Direction, MazeError};

/// Square lattice owning every cell of a maze.
///
/// Cells live in a row-major arena and refer to each other by index. The
/// lattice adjacency is wired once in [`Grid::new`]; afterwards only links change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    size: usize,
}

impl Grid {
    /// Creates a `size`x`size` grid with every 4-neighbor adjacency wired and no links.
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize(size));
        }

        let mut cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::new((x, y))))
            .collect::<Box<[Cell]>>();

        for index in 0..cells.len() {
            let coord = cells[index].coord();
            for direction in Direction::ALL {
                if let Some((nx, ny)) = direction.step(coord, size) {
                    cells[index].set_neighbor(direction, ny * size + nx);
                }
            }
        }

        Ok(Grid { cells, size })
    }

    /// Side length of the grid in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    /// Arena index of a coordinate.
    ///
    /// # Panics
    /// If `coord` is outside the grid.
    pub fn index_of(&self, coord: Coord) -> usize {
        if !self.is_in_bounds(coord) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                coord, self.size, self.size
            );
        }
        coord.1 * self.size + coord.0
    }

    pub fn coord_of(&self, index: usize) -> Coord {
        self.cells[index].coord()
    }

    /// Cell at `coord`.
    ///
    /// # Panics
    /// If `coord` is outside the grid.
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.is_in_bounds(coord)
            .then(|| &self.cells[coord.1 * self.size + coord.0])
    }

    /// Index of a uniformly chosen cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(0..self.cells.len())
    }

    /// Lattice neighbors of the cell at `index`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[index].neighbors()
    }

    /// Carves a passage between two adjacent cells, on both sides.
    /// Returns `false` if the passage already existed.
    ///
    /// # Panics
    /// If the cells are not lattice neighbors.
    pub fn link(&mut self, a: usize, b: usize) -> bool {
        if !self.cells[a].neighbors().any(|n| n == b) {
            panic!(
                "Cannot link {:?} and {:?}: cells are not adjacent",
                self.coord_of(a),
                self.coord_of(b)
            );
        }
        let added = self.cells[a].add_link(b);
        self.cells[b].add_link(a);
        added
    }

    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.cells[a].is_linked(b)
    }

    /// Whether the cell at `coord` has an opening towards `direction`.
    pub fn is_linked_towards(&self, coord: Coord, direction: Direction) -> bool {
        let index = self.index_of(coord);
        self.cells[index]
            .neighbor(direction)
            .is_some_and(|n| self.cells[index].is_linked(n))
    }

    /// Cells with exactly one passage, in row-major order.
    pub fn dead_ends(&self) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&i| self.cells[i].is_dead_end())
            .collect()
    }

    /// Number of undirected passages in the maze.
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(|c| c.links().len()).sum::<usize>() / 2
    }

    /// Whether every cell can be reached from every other one through passages.
    pub fn is_connected(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;

        while let Some(index) = queue.pop_front() {
            for &next in self.cells[index].links() {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == self.cells.len()
    }

    /// Clears distance, predecessor, path and visited flags on every cell.
    pub fn reset_all(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        self.cell(coord)
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::ops::IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}
