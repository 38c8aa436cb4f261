pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// Cell coordinates `(x, y)`: `x` is the column counted from the west edge,
/// `y` is the row counted from the north edge.
pub type Coord = (usize, usize);

/// Errors raised while building or post-processing a maze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("braid fraction must be at least 1, got {0}")]
    InvalidBraidFraction(u32),
}

/// The four lattice directions a cell can have a neighbor in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Every direction, in the order neighbors are visited everywhere in the crate.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Slot of this direction in a cell's neighbor table.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Coordinate one step away in this direction, if it stays inside a `size`x`size` grid.
    pub fn step(self, coord: Coord, size: usize) -> Option<Coord> {
        let (x, y) = coord;
        match self {
            Direction::North => y.checked_sub(1).map(|y| (x, y)),
            Direction::South => (y + 1 < size).then_some((x, y + 1)),
            Direction::West => x.checked_sub(1).map(|x| (x, y)),
            Direction::East => (x + 1 < size).then_some((x + 1, y)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        assert_eq!(Direction::North.step((2, 0), 3), None);
        assert_eq!(Direction::West.step((0, 1), 3), None);
        assert_eq!(Direction::South.step((1, 2), 3), None);
        assert_eq!(Direction::East.step((2, 1), 3), None);
        assert_eq!(Direction::North.step((1, 1), 3), Some((1, 0)));
        assert_eq!(Direction::South.step((1, 1), 3), Some((1, 2)));
        assert_eq!(Direction::West.step((1, 1), 3), Some((0, 1)));
        assert_eq!(Direction::East.step((1, 1), 3), Some((2, 1)));
    }

    #[test]
    fn test_opposite_round_trips() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }
}
