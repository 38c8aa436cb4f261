use super::{Coord, Direction};

/// A node of the maze graph.
///
/// Cells never own each other: neighbors, links and predecessors are arena
/// indices into the [`Grid`](super::Grid) that owns every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    /// Lattice neighbor per direction, in [`Direction::ALL`] order. Fixed after construction.
    neighbors: [Option<usize>; 4],
    /// Carved passages, in the order they were made.
    links: Vec<usize>,
    /// Distance from the source of the most recent solve, `None` if unreached.
    distance: Option<usize>,
    /// Previous cell on the shortest-path tree of the most recent solve.
    predecessor: Option<usize>,
    on_path: bool,
    /// Only meaningful while Hunt-and-Kill is carving.
    visited: bool,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Self {
        Cell {
            coord,
            neighbors: [None; 4],
            links: Vec::with_capacity(4),
            distance: None,
            predecessor: None,
            on_path: false,
            visited: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors[direction.slot()]
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, index: usize) {
        self.neighbors[direction.slot()] = Some(index);
    }

    /// Existing lattice neighbors in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().filter_map(|n| *n)
    }

    pub fn links(&self) -> &[usize] {
        &self.links
    }

    pub fn is_linked(&self, index: usize) -> bool {
        self.links.contains(&index)
    }

    /// Records a passage to `index`. Returns `false` if it already existed.
    pub(crate) fn add_link(&mut self, index: usize) -> bool {
        if self.is_linked(index) {
            return false;
        }
        self.links.push(index);
        true
    }

    pub fn is_dead_end(&self) -> bool {
        self.links.len() == 1
    }

    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    pub(crate) fn set_distance(&mut self, distance: usize) {
        self.distance = Some(distance);
    }

    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub(crate) fn set_predecessor(&mut self, index: usize) {
        self.predecessor = Some(index);
    }

    pub fn on_path(&self) -> bool {
        self.on_path
    }

    pub(crate) fn mark_on_path(&mut self) {
        self.on_path = true;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Clears the solver and carving state, keeping neighbors and links.
    pub fn reset(&mut self) {
        self.distance = None;
        self.predecessor = None;
        self.on_path = false;
        self.visited = false;
    }
}
