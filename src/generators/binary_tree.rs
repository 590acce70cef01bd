use rand::Rng;

use super::get_rng;
use crate::maze::Grid;

/// The Binary Tree algorithm.
///
/// Visits every cell once in row-major order and links it to a uniformly
/// random choice between its north and east neighbors, whichever exist.
/// The top-left corner has neither and links nothing. Finishes in exactly
/// `size()` steps, at the cost of a strong corridor bias along the top and
/// right edges: row 0 is always one continuous east-running run.
pub fn binary_tree(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    for id in grid.each_cell().collect::<Vec<_>>() {
        let cell = &grid[id];
        let candidates = [cell.north(), cell.east()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        if !candidates.is_empty() {
            let neighbor = candidates[rng.random_range(0..candidates.len())];
            grid.link(id, neighbor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_is_one_east_running_chain() {
        // Row 0 can never link north, so every cell but the last links east.
        for seed in 0..10 {
            let mut grid = Grid::new(3, 3).unwrap();
            binary_tree(&mut grid, Some(seed));
            for column in 0..2 {
                let cell = grid.cell_at(0, column).unwrap();
                let east = grid.cell_at(0, column + 1).unwrap();
                assert!(grid.is_linked(cell, east));
            }
        }
    }

    #[test]
    fn test_single_cell_grid_links_nothing() {
        let mut grid = Grid::new(1, 1).unwrap();
        binary_tree(&mut grid, Some(0));
        assert_eq!(grid[grid.cell_at(0, 0).unwrap()].link_count(), 0);
    }
}
