mod dijkstra;

pub use dijkstra::dijkstra;

use crate::maze::{Coord, Grid};

/// Endpoints and length of the path left marked on the grid by [`find_hardest_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Cell the final distances are measured from.
    pub start: Coord,
    /// Other end of the marked path.
    pub end: Coord,
    /// Number of passages between the two ends.
    pub length: usize,
}

/// Cell with the greatest distance after a sweep, scanning in row-major order.
///
/// Starts from `from` and only replaces the best cell on a strictly greater
/// distance, so the first maximum wins. Unreached cells are never picked.
pub fn find_farthest(grid: &Grid, from: usize) -> usize {
    let mut farthest = from;
    let mut best = grid[from].distance();

    for (index, cell) in grid.cells().iter().enumerate() {
        if let Some(distance) = cell.distance() {
            if best.is_none_or(|best| distance > best) {
                farthest = index;
                best = Some(distance);
            }
        }
    }
    farthest
}

/// Searches for the two cells furthest apart and leaves the path between them marked.
///
/// Double sweep from the north-west corner: the farthest cell `A` from the
/// corner, then the farthest cell `B` from `A`, then a last sweep from `B` so
/// the grid ends up holding distances from `B` and the `A`-`B` path. Exact on a
/// perfect maze; once braiding adds cycles it is only an approximation of the diameter.
pub fn find_hardest_path(grid: &mut Grid) -> Solution {
    let size = grid.size();
    let corner = grid.index_of((0, 0));
    let opposite = grid.index_of((size - 1, size - 1));

    grid.reset_all();
    dijkstra(grid, corner, opposite);
    let a = find_farthest(grid, corner);

    grid.reset_all();
    dijkstra(grid, a, opposite);
    let b = find_farthest(grid, a);

    grid.reset_all();
    let length = dijkstra(grid, b, a).unwrap_or_default();

    let solution = Solution {
        start: grid.coord_of(b),
        end: grid.coord_of(a),
        length,
    };
    tracing::debug!(
        "[solve] hardest path {:?} -> {:?}, length {}",
        solution.start,
        solution.end,
        solution.length
    );
    solution
}

/// Cells flagged as on the path, in row-major order.
pub fn path_cells(grid: &Grid) -> Vec<Coord> {
    grid.cells()
        .iter()
        .filter(|c| c.on_path())
        .map(|c| c.coord())
        .collect()
}
