use rand::{Rng, rngs::StdRng};

use super::get_rng;
use crate::maze::{CellId, Grid};

/// Wilson's algorithm.
///
/// Grows the maze by loop-erased random walks: pick a random unvisited
/// cell, walk randomly until the walk touches any visited cell, erasing
/// loops by truncating the walk back to the first occurrence whenever it
/// revisits a cell on its own path, then link the whole surviving path into
/// the maze. Repeats until no unvisited cells remain. Terminates almost
/// surely and, unlike binary tree or sidewinder, samples uniformly among
/// all spanning trees of the lattice.
pub fn wilson(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let first = grid.random_cell(&mut rng);
    let mut unvisited = grid
        .each_cell()
        .filter(|&cell| cell != first)
        .collect::<Vec<_>>();
    loop_erased_fill(grid, &mut unvisited, &mut rng);
}

/// Links every remaining unvisited cell into the maze by loop-erased
/// random walks. Cells absent from `unvisited` are treated as already part
/// of the maze; at least one cell must be. Shared by [`wilson`] and the
/// hybrid generator's finishing phase.
pub(super) fn loop_erased_fill(grid: &mut Grid, unvisited: &mut Vec<CellId>, rng: &mut StdRng) {
    let mut in_maze = vec![true; grid.size()];
    for &cell in unvisited.iter() {
        in_maze[cell.index()] = false;
    }

    let mut random_steps = 0u64;
    let mut loops_erased = 0u64;

    while !unvisited.is_empty() {
        let start = unvisited[rng.random_range(0..unvisited.len())];
        let mut path = vec![start];

        // Walk until the path tip lands on a cell already in the maze.
        loop {
            let tip = path[path.len() - 1];
            if in_maze[tip.index()] {
                break;
            }
            let neighbors = grid[tip].neighbors().collect::<Vec<_>>();
            let next = neighbors[rng.random_range(0..neighbors.len())];
            random_steps += 1;

            if let Some(first_occurrence) = path.iter().position(|&cell| cell == next) {
                path.truncate(first_occurrence + 1);
                loops_erased += 1;
            } else {
                path.push(next);
            }
        }

        for pair in path.windows(2) {
            grid.link(pair[0], pair[1]);
            in_maze[pair[0].index()] = true;
        }
        unvisited.retain(|&cell| !in_maze[cell.index()]);
    }

    tracing::debug!(
        "[wilson] filled a grid of size {} with {} random steps, {} loops erased",
        grid.size(),
        random_steps,
        loops_erased
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_gets_linked() {
        for seed in 0..5 {
            let mut grid = Grid::new(4, 4).unwrap();
            wilson(&mut grid, Some(seed));
            assert!(grid.each_cell().all(|cell| grid[cell].link_count() >= 1));
        }
    }

    /// A 2x2 grid has exactly four spanning trees, one per omitted edge of
    /// the 4-cycle. Wilson's algorithm samples uniformly, so over many
    /// seeded runs each tree should show up at a roughly equal rate.
    #[test]
    fn test_two_by_two_trees_are_roughly_uniform() {
        let mut counts = [0u32; 4];
        for seed in 0..1000 {
            let mut grid = Grid::new(2, 2).unwrap();
            wilson(&mut grid, Some(seed));

            let edges = [
                (grid.cell_at(0, 0).unwrap(), grid.cell_at(0, 1).unwrap()),
                (grid.cell_at(0, 1).unwrap(), grid.cell_at(1, 1).unwrap()),
                (grid.cell_at(1, 1).unwrap(), grid.cell_at(1, 0).unwrap()),
                (grid.cell_at(1, 0).unwrap(), grid.cell_at(0, 0).unwrap()),
            ];
            let omitted = edges
                .iter()
                .enumerate()
                .filter(|&(_, &(a, b))| !grid.is_linked(a, b))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();
            assert_eq!(omitted.len(), 1, "a 2x2 spanning tree omits one edge");
            counts[omitted[0]] += 1;
        }
        // Expected 250 each; allow generous slack for a smoke test.
        for count in counts {
            assert!(count > 150, "spanning tree counts skewed: {counts:?}");
        }
    }
}
