use rand::Rng;

use super::get_rng;
use super::wilson::loop_erased_fill;
use crate::error::MazeError;
use crate::maze::Grid;

/// Hybrid Aldous-Broder / Wilson generation.
///
/// Runs an Aldous-Broder random walk while visiting is cheap, then hands
/// the stragglers to Wilson's loop-erasure once no more than
/// `size() * threshold` cells remain unvisited. Aldous-Broder wastes most
/// of its time revisiting near the end, which is exactly where Wilson's
/// targeted walks are fast; the result is still an unlinked-to-spanning-
/// tree carve over the whole grid.
///
/// `threshold` must lie in `[0.0, 1.0]`: at 1.0 the walk phase is skipped
/// entirely, at 0.0 Aldous-Broder runs to completion.
pub fn hybrid(grid: &mut Grid, threshold: f64, seed: Option<u64>) -> Result<(), MazeError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MazeError::InvalidThreshold(threshold));
    }
    let mut rng = get_rng(seed);

    let mut current = grid.random_cell(&mut rng);
    let mut unvisited = grid
        .each_cell()
        .filter(|&cell| cell != current)
        .collect::<Vec<_>>();

    let cutoff = grid.size() as f64 * threshold;
    let mut walk_steps = 0u64;
    while unvisited.len() as f64 > cutoff {
        let neighbors = grid[current].neighbors().collect::<Vec<_>>();
        let next = neighbors[rng.random_range(0..neighbors.len())];
        walk_steps += 1;

        if let Some(position) = unvisited.iter().position(|&cell| cell == next) {
            grid.link(current, next);
            unvisited.swap_remove(position);
        }
        current = next;
    }
    tracing::debug!(
        "[hybrid] random walk visited {} of {} cells in {} steps",
        grid.size() - unvisited.len(),
        grid.size(),
        walk_steps
    );

    loop_erased_fill(grid, &mut unvisited, &mut rng);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            hybrid(&mut grid, 1.1, Some(0)).unwrap_err(),
            MazeError::InvalidThreshold(1.1)
        );
        assert_eq!(
            hybrid(&mut grid, -0.5, Some(0)).unwrap_err(),
            MazeError::InvalidThreshold(-0.5)
        );
    }

    #[test]
    fn test_extreme_thresholds_still_cover_the_grid() {
        // 1.0 degenerates to pure Wilson, 0.0 to pure Aldous-Broder.
        for threshold in [0.0, 0.5, 1.0] {
            let mut grid = Grid::new(4, 4).unwrap();
            hybrid(&mut grid, threshold, Some(11)).unwrap();
            assert!(grid.each_cell().all(|cell| grid[cell].link_count() >= 1));
        }
    }
}
