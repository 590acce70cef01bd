use rand::Rng;

use super::get_rng;
use crate::error::MazeError;
use crate::maze::Grid;

/// The Sidewinder algorithm.
///
/// Works one row at a time, accumulating a "run" of consecutive cells. At
/// each cell a weighted coin decides whether to keep running east
/// (probability `1 - odds`) or to close the run by linking one of its
/// cells, chosen uniformly, to the north. The east edge of the grid forces
/// a run closed; row 0 has no north to fall back on, so it always runs
/// east into a single corridor.
///
/// `odds` must satisfy `0.0 <= odds < 1.0`: at 1.0 a run could never
/// continue east and row 0 could never be completed.
pub fn sidewinder(grid: &mut Grid, odds: f64, seed: Option<u64>) -> Result<(), MazeError> {
    if !(0.0..1.0).contains(&odds) {
        return Err(MazeError::InvalidOdds(odds));
    }
    let mut rng = get_rng(seed);

    let rows = grid
        .each_row()
        .map(|row| row.collect::<Vec<_>>())
        .collect::<Vec<_>>();
    for row in rows {
        let mut run = Vec::new();
        for id in row {
            run.push(id);
            let at_top = grid[id].row() == 0;
            let continue_east = at_top || rng.random::<f64>() > odds;
            match grid[id].east() {
                Some(east) if continue_east => grid.link(id, east),
                _ if !at_top => {
                    let member = run[rng.random_range(0..run.len())];
                    if let Some(north) = grid[member].north() {
                        grid.link(member, north);
                    }
                    run.clear();
                }
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odds_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            sidewinder(&mut grid, 1.0, Some(0)).unwrap_err(),
            MazeError::InvalidOdds(1.0)
        );
        assert_eq!(
            sidewinder(&mut grid, -0.1, Some(0)).unwrap_err(),
            MazeError::InvalidOdds(-0.1)
        );
        sidewinder(&mut grid, 0.0, Some(0)).unwrap();
    }

    #[test]
    fn test_top_row_is_a_corridor() {
        for seed in 0..10 {
            let mut grid = Grid::new(4, 4).unwrap();
            sidewinder(&mut grid, 0.5, Some(seed)).unwrap();
            for column in 0..3 {
                let cell = grid.cell_at(0, column).unwrap();
                let east = grid.cell_at(0, column + 1).unwrap();
                assert!(grid.is_linked(cell, east));
            }
        }
    }

    #[test]
    fn test_zero_odds_never_closes_a_run_early() {
        // With odds 0 every cell keeps running east; each row becomes one
        // corridor, closed only at the east edge.
        let mut grid = Grid::new(3, 4).unwrap();
        sidewinder(&mut grid, 0.0, Some(1)).unwrap();
        for row in 0..3 {
            for column in 0..3 {
                let cell = grid.cell_at(row, column).unwrap();
                let east = grid.cell_at(row, column + 1).unwrap();
                assert!(grid.is_linked(cell, east));
            }
        }
    }
}
