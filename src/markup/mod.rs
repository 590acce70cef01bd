mod colorize;
mod dijkstra;
mod path;

pub use colorize::{Channel, Rgb, colorize_distances, colorize_from_center, intensity_colorize};
pub use dijkstra::{compute_distances, farthest_cell};
pub use path::{PathMarkers, compute_longest_path, compute_shortest_path};

use crate::error::MazeError;
use crate::maze::{CellId, Grid};

/// A per-cell value overlay for a grid: one value per cell, with a declared
/// default returned for cells that were never set.
///
/// Storage is a dense table indexed by [`CellId`], so a markup must only be
/// used with the grid it was created from. Presence (`is_set`) is tracked
/// separately from the value, which is how reachability queries distinguish
/// an unreached cell from one legitimately holding the default.
///
/// Independent markups over the same grid never share storage.
#[derive(Debug)]
pub struct Markup<T> {
    num_rows: usize,
    num_columns: usize,
    marks: Vec<Option<T>>,
    default: T,
}

impl<T: Clone> Markup<T> {
    pub fn new(grid: &Grid, default: T) -> Self {
        Markup {
            num_rows: grid.num_rows(),
            num_columns: grid.num_columns(),
            marks: vec![None; grid.size()],
            default,
        }
    }

    /// Clears every mark, keeping the default.
    pub fn reset(&mut self) {
        self.marks.fill(None);
    }

    pub fn set(&mut self, cell: CellId, value: T) {
        self.marks[cell.index()] = Some(value);
    }

    /// The value for a cell, or the default when the cell was never set.
    pub fn get(&self, cell: CellId) -> &T {
        self.marks[cell.index()].as_ref().unwrap_or(&self.default)
    }

    /// Whether the cell was explicitly set.
    pub fn is_set(&self, cell: CellId) -> bool {
        self.marks[cell.index()].is_some()
    }

    /// Bounds-checked set by row/column position.
    pub fn set_item_at(&mut self, row: usize, column: usize, value: T) -> Result<(), MazeError> {
        let index = self.checked_index(row, column)?;
        self.marks[index] = Some(value);
        Ok(())
    }

    /// Bounds-checked get by row/column position. In-bounds cells that were
    /// never set yield `Ok(None)`, not the default.
    pub fn get_item_at(&self, row: usize, column: usize) -> Result<Option<&T>, MazeError> {
        let index = self.checked_index(row, column)?;
        Ok(self.marks[index].as_ref())
    }

    fn checked_index(&self, row: usize, column: usize) -> Result<usize, MazeError> {
        if row < self.num_rows && column < self.num_columns {
            Ok(row * self.num_columns + column)
        } else {
            Err(MazeError::OutOfBounds {
                row,
                column,
                rows: self.num_rows,
                columns: self.num_columns,
            })
        }
    }

    /// The cell with the largest set value, or `None` when nothing was set.
    /// Ties resolve to the first cell in row-major order; callers must not
    /// rely on a particular winner among equal values.
    pub fn max(&self) -> Option<CellId>
    where
        T: Ord,
    {
        self.extremum(|candidate, best| candidate > best)
    }

    /// The cell with the smallest set value, or `None` when nothing was set.
    pub fn min(&self) -> Option<CellId>
    where
        T: Ord,
    {
        self.extremum(|candidate, best| candidate < best)
    }

    fn extremum(&self, replaces: impl Fn(&T, &T) -> bool) -> Option<CellId> {
        let mut best: Option<(CellId, &T)> = None;
        for (index, mark) in self.marks.iter().enumerate() {
            if let Some(value) = mark {
                match best {
                    Some((_, best_value)) if !replaces(value, best_value) => {}
                    _ => best = Some((CellId(index), value)),
                }
            }
        }
        best.map(|(id, _)| id)
    }
}
