use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod hunt_and_kill;
mod recur_backtrack;
mod sidewinder;
mod wilson;

pub use aldous_broder::aldous_broder;
pub use binary_tree::binary_tree;
pub use hunt_and_kill::hunt_and_kill;
pub use recur_backtrack::recursive_backtrack;
pub use sidewinder::sidewinder;
pub use wilson::wilson;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze generation algorithms. Each one carves a spanning tree into a grid with no links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Generator {
    BinaryTree,
    Sidewinder,
    AldousBroder,
    Wilsons,
    HuntAndKill,
    RecursiveBacktracker,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::AldousBroder,
        Generator::Wilsons,
        Generator::HuntAndKill,
        Generator::RecursiveBacktracker,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::Wilsons => write!(f, "Wilson's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::RecursiveBacktracker => write!(f, "Recursive Backtracker"),
        }
    }
}

/// Carves a perfect maze into `grid` with the selected algorithm.
pub fn generate_maze(grid: &mut Grid, generator: Generator, rng: &mut impl Rng) {
    match generator {
        Generator::BinaryTree => binary_tree(grid, rng),
        Generator::Sidewinder => sidewinder(grid, rng),
        Generator::AldousBroder => aldous_broder(grid, rng),
        Generator::Wilsons => wilson(grid, rng),
        Generator::HuntAndKill => hunt_and_kill(grid, rng),
        Generator::RecursiveBacktracker => recursive_backtrack(grid, rng),
    }
    tracing::debug!(
        "[generate] {} carved {} links into a {}x{} grid",
        generator,
        grid.link_count(),
        grid.size(),
        grid.size()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_spanning_tree(grid: &Grid, generator: Generator) {
        assert_eq!(
            grid.link_count(),
            grid.len() - 1,
            "{} on a {}x{} grid",
            generator,
            grid.size(),
            grid.size()
        );
        assert!(
            grid.is_connected(),
            "{} left a {}x{} grid disconnected",
            generator,
            grid.size(),
            grid.size()
        );
    }

    #[test]
    fn test_every_generator_builds_a_spanning_tree() {
        for generator in Generator::ALL {
            for size in 1..=8 {
                let mut grid = Grid::new(size).unwrap();
                let mut rng = get_rng(Some(size as u64));
                generate_maze(&mut grid, generator, &mut rng);
                assert_spanning_tree(&grid, generator);
            }
        }
    }

    #[test]
    fn test_spanning_tree_on_larger_grid() {
        for generator in Generator::ALL {
            let mut grid = Grid::new(20).unwrap();
            let mut rng = get_rng(Some(2024));
            generate_maze(&mut grid, generator, &mut rng);
            assert_spanning_tree(&grid, generator);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        for generator in Generator::ALL {
            let mut first = Grid::new(9).unwrap();
            let mut second = Grid::new(9).unwrap();
            generate_maze(&mut first, generator, &mut get_rng(Some(42)));
            generate_maze(&mut second, generator, &mut get_rng(Some(42)));
            assert_eq!(first, second, "{} is not deterministic", generator);
        }
    }

    #[test]
    fn test_generators_leave_solver_state_clean() {
        for generator in Generator::ALL {
            let mut grid = Grid::new(6).unwrap();
            generate_maze(&mut grid, generator, &mut get_rng(Some(3)));
            assert!(grid.cells().iter().all(|c| c.distance().is_none()));
            assert!(grid.cells().iter().all(|c| !c.on_path()));
        }
    }
}
