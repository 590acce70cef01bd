use std::{cmp::Reverse, collections::BinaryHeap};

use super::Markup;
use crate::maze::{CellId, Grid};

/// Computes single-source shortest-path distances from `root` over the
/// link graph, one hop per link.
///
/// Cells not reachable through links stay unset; check with
/// [`Markup::is_set`], not by comparing against the default.
///
/// Every edge weighs 1, so this degenerates to a breadth-first sweep; the
/// priority queue stays so non-uniform weights would not need a redesign.
/// `(distance, CellId)` tuple ordering breaks distance ties in row-major
/// order, keeping pop order deterministic.
pub fn compute_distances(grid: &Grid, root: CellId) -> Markup<u32> {
    let mut distances = Markup::new(grid, 0u32);
    distances.set(root, 0);

    // Using Reverse to turn the max-heap into a min-heap.
    let mut frontier: BinaryHeap<Reverse<(u32, CellId)>> = BinaryHeap::new();
    frontier.push(Reverse((0, root)));

    while let Some(Reverse((dist, cell))) = frontier.pop() {
        // A better distance was recorded after this entry was pushed.
        if dist > *distances.get(cell) {
            continue;
        }
        for &neighbor in grid[cell].all_links() {
            let next = dist + 1;
            if !distances.is_set(neighbor) || next < *distances.get(neighbor) {
                distances.set(neighbor, next);
                frontier.push(Reverse((next, neighbor)));
            }
        }
    }
    distances
}

/// The cell farthest from the distance field's root, with its distance.
/// Among equally distant cells the first in row-major order is reported.
pub fn farthest_cell(distances: &Markup<u32>) -> Option<(CellId, u32)> {
    distances.max().map(|cell| (cell, *distances.get(cell)))
}
