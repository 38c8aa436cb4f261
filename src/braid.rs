use rand::{Rng, seq::IndexedRandom};

use crate::maze::{Grid, MazeError};

/// Opens an extra passage out of roughly one in `fraction` dead ends.
///
/// Dead ends are collected before any passage is added. Each one picked
/// (with probability `1 / fraction`) is linked to a random lattice neighbor it is
/// not linked to yet; cells with no such neighbor are left alone. The added
/// passages create cycles, so the maze is no longer perfect afterwards.
///
/// Returns the number of passages added.
pub fn braid(grid: &mut Grid, fraction: u32, rng: &mut impl Rng) -> Result<usize, MazeError> {
    if fraction == 0 {
        return Err(MazeError::InvalidBraidFraction(fraction));
    }

    let dead_ends = grid.dead_ends();
    let mut added = 0;

    for cell in dead_ends.iter().copied() {
        if rng.random_range(0..fraction) != 0 {
            continue;
        }

        let unlinked = grid
            .neighbors(cell)
            .filter(|&n| !grid.is_linked(cell, n))
            .collect::<Vec<_>>();

        if let Some(&neighbor) = unlinked.choose(rng) {
            grid.link(cell, neighbor);
            added += 1;
        }
    }

    tracing::debug!(
        "[braid] 1/{} of {} dead ends: added {} passages, {} dead ends left",
        fraction,
        dead_ends.len(),
        added,
        grid.dead_ends().len()
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};

    #[test]
    fn test_zero_fraction_is_rejected() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(
            braid(&mut grid, 0, &mut get_rng(Some(0))),
            Err(MazeError::InvalidBraidFraction(0))
        );
    }

    #[test]
    fn test_full_braid_removes_every_dead_end() {
        for generator in Generator::ALL {
            for size in 2..=9 {
                let mut grid = Grid::new(size).unwrap();
                let mut rng = get_rng(Some(100 + size as u64));
                generate_maze(&mut grid, generator, &mut rng);
                let before = grid.link_count();

                let added = braid(&mut grid, 1, &mut rng).unwrap();

                assert!(grid.dead_ends().is_empty(), "{} on {}x{}", generator, size, size);
                assert_eq!(grid.link_count(), before + added);
                assert!(grid.is_connected());
            }
        }
    }

    #[test]
    fn test_single_cell_has_nothing_to_braid() {
        let mut grid = Grid::new(1).unwrap();
        assert_eq!(braid(&mut grid, 1, &mut get_rng(Some(0))), Ok(0));
    }

    #[test]
    fn test_larger_fraction_braids_less() {
        let mut light = Grid::new(30).unwrap();
        let mut heavy = Grid::new(30).unwrap();
        generate_maze(&mut light, Generator::HuntAndKill, &mut get_rng(Some(4)));
        generate_maze(&mut heavy, Generator::HuntAndKill, &mut get_rng(Some(4)));

        let light_added = braid(&mut light, 50, &mut get_rng(Some(5))).unwrap();
        let heavy_added = braid(&mut heavy, 1, &mut get_rng(Some(5))).unwrap();

        assert!(light_added < heavy_added);
        assert!(light.dead_ends().len() > heavy.dead_ends().len());
    }
}
