use rand::Rng;

use super::get_rng;
use crate::maze::Grid;

/// The Aldous-Broder algorithm.
///
/// A plain random walk from a random start: at each step pick a uniformly
/// random geographic neighbor, link it to the current cell if it has never
/// been visited, and move there either way. Stops once every cell has been
/// visited. Unbiased, but the walk's cover time is unbounded, so expect it
/// to be slow on large grids.
pub fn aldous_broder(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let mut current = grid.random_cell(&mut rng);
    let mut visited = vec![false; grid.size()];
    visited[current.index()] = true;
    let mut remaining = grid.size() - 1;
    let mut steps = 0u64;

    while remaining > 0 {
        let neighbors = grid[current].neighbors().collect::<Vec<_>>();
        let next = neighbors[rng.random_range(0..neighbors.len())];
        if !visited[next.index()] {
            grid.link(current, next);
            visited[next.index()] = true;
            remaining -= 1;
        }
        current = next;
        steps += 1;
    }
    tracing::debug!(
        "[aldous-broder] covered a grid of size {} in {} steps",
        grid.size(),
        steps
    );
}
