use rand::Rng;

use super::get_rng;
use crate::maze::{CellId, Grid};

/// The Recursive Backtracker algorithm.
///
/// Depth-first carving with an explicit stack: while the cell on top of
/// the stack has unvisited geographic neighbors, link to a uniformly
/// random one and push it; otherwise pop and backtrack. The explicit stack
/// keeps large grids from exhausting the call stack. Produces long,
/// winding corridors ("high river" mazes). `start` defaults to a random
/// cell.
pub fn recursive_backtracker(grid: &mut Grid, start: Option<CellId>, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let start = start.unwrap_or_else(|| grid.random_cell(&mut rng));
    let mut visited = vec![false; grid.size()];
    visited[start.index()] = true;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let candidates = grid[current]
            .neighbors()
            .filter(|&cell| !visited[cell.index()])
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            stack.pop();
        } else {
            let neighbor = candidates[rng.random_range(0..candidates.len())];
            grid.link(current, neighbor);
            visited[neighbor.index()] = true;
            stack.push(neighbor);
        }
    }
}
