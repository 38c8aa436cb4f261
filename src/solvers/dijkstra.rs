use std::{cmp::Reverse, collections::BinaryHeap};

use crate::maze::Grid;

/// Unit-weight Dijkstra over the maze passages, run from `source` until every
/// reachable cell has its final distance and predecessor.
///
/// The sink does not stop the sweep; it is only where the path marking starts:
/// predecessors are followed back from `sink`, flagging each cell as on the path.
/// An unreachable sink marks nothing.
///
/// Expects a grid whose solver state was reset. Returns the distance of `sink`.
pub fn dijkstra(grid: &mut Grid, source: usize, sink: usize) -> Option<usize> {
    grid[source].set_distance(0);

    // Priority queue for Dijkstra's algorithm
    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        // Skip entries that were superseded by a shorter distance
        if grid[current].distance().is_some_and(|known| distance > known) {
            continue;
        }

        let candidate = distance + 1; // Uniform cost for each step
        let links = grid[current].links().to_vec();
        for next in links {
            let is_cheaper = grid[next]
                .distance()
                .is_none_or(|existing| candidate < existing);
            if is_cheaper {
                grid[next].set_distance(candidate);
                grid[next].set_predecessor(current);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    mark_path(grid, sink);
    grid[sink].distance()
}

/// Flags `sink` and every predecessor back to the source as on the path.
fn mark_path(grid: &mut Grid, sink: usize) {
    if grid[sink].distance().is_none() {
        return;
    }

    let mut cell = Some(sink);
    while let Some(index) = cell {
        grid[index].mark_on_path();
        cell = grid[index].predecessor();
    }
}
