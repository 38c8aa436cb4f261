pub mod renderer;

use rand::Rng;

use crate::{
    braid::braid,
    generators::{Generator, generate_maze, get_rng},
    maze::{Grid, MazeError},
    solvers::{Solution, find_hardest_path},
};

/// Everything needed to build one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Side length of the grid in cells.
    pub size: usize,
    /// Braid roughly one in `braid` dead ends. `None` keeps the maze perfect.
    pub braid: Option<u32>,
    pub generator: Generator,
    /// Seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 15,
            braid: Some(5),
            generator: Generator::HuntAndKill,
            seed: None,
        }
    }
}

/// A generated maze with its hardest path marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub solution: Solution,
    /// Passages added by braiding.
    pub braided: usize,
}

impl Maze {
    pub fn dead_end_count(&self) -> usize {
        self.grid.dead_ends().len()
    }
}

/// Builds the grid, carves it, braids it and runs the hardest-path search.
pub fn build(config: &MazeConfig) -> Result<Maze, MazeError> {
    let mut rng = get_rng(config.seed);
    build_with_rng(config, &mut rng)
}

/// Same as [`build`], drawing from the given random source instead of `config.seed`.
pub fn build_with_rng(config: &MazeConfig, rng: &mut impl Rng) -> Result<Maze, MazeError> {
    let mut grid = Grid::new(config.size)?;
    tracing::info!(
        "[app] Generating a {}x{} maze with {}",
        config.size,
        config.size,
        config.generator
    );
    generate_maze(&mut grid, config.generator, rng);

    let braided = match config.braid {
        Some(fraction) => braid(&mut grid, fraction, rng)?,
        None => 0,
    };

    let solution = find_hardest_path(&mut grid);
    tracing::info!(
        "[app] Hardest path {:?} -> {:?} is {} steps long, {} dead ends left",
        solution.start,
        solution.end,
        solution.length,
        grid.dead_ends().len()
    );

    Ok(Maze {
        grid,
        solution,
        braided,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MazeConfig::default();
        assert_eq!(config.size, 15);
        assert_eq!(config.braid, Some(5));
        assert_eq!(config.generator, Generator::HuntAndKill);
    }

    #[test]
    fn test_build_is_reproducible_with_a_seed() {
        let config = MazeConfig {
            seed: Some(17),
            ..MazeConfig::default()
        };
        assert_eq!(build(&config), build(&config));
    }

    #[test]
    fn test_build_without_braiding_is_perfect() {
        let config = MazeConfig {
            size: 7,
            braid: None,
            generator: Generator::Sidewinder,
            seed: Some(3),
        };
        let maze = build(&config).unwrap();
        assert_eq!(maze.braided, 0);
        assert_eq!(maze.grid.link_count(), 48);
        assert_eq!(maze.grid[maze.solution.end].distance(), Some(maze.solution.length));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let zero_size = MazeConfig {
            size: 0,
            ..MazeConfig::default()
        };
        assert_eq!(build(&zero_size), Err(MazeError::InvalidSize(0)));

        let zero_braid = MazeConfig {
            braid: Some(0),
            seed: Some(1),
            ..MazeConfig::default()
        };
        assert_eq!(build(&zero_braid), Err(MazeError::InvalidBraidFraction(0)));
    }
}
