use rand::Rng;

use super::cell::{Cell, CellId};
use crate::error::MazeError;

/// A fixed-size rectangular collection of cells. The grid owns every cell,
/// wires the lattice topology once at construction, and mediates the
/// symmetric link relation that represents carved passages.
///
/// Cells are stored in a flat row-major arena and addressed by [`CellId`];
/// the shape never changes after construction.
#[derive(Debug)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an unlinked grid. Fails if either dimension is zero.
    pub fn new(num_rows: usize, num_columns: usize) -> Result<Self, MazeError> {
        if num_rows == 0 || num_columns == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: num_rows,
                columns: num_columns,
            });
        }
        let mut grid = Grid {
            num_rows,
            num_columns,
            cells: Self::create_cells(num_rows, num_columns),
        };
        grid.connect_cells();
        Ok(grid)
    }

    /// Calls the cells into being, unconnected: neighbors cannot be wired
    /// until every cell exists.
    fn create_cells(num_rows: usize, num_columns: usize) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(num_rows * num_columns);
        for row in 0..num_rows {
            for column in 0..num_columns {
                cells.push(Cell::new(row, column));
            }
        }
        cells
    }

    /// Sets the north/south/east/west neighbor of every cell to the
    /// adjacent cell when it is in bounds.
    fn connect_cells(&mut self) {
        for index in 0..self.cells.len() {
            let row = index / self.num_columns;
            let column = index % self.num_columns;
            let north = (row > 0).then(|| CellId(index - self.num_columns));
            let south = (row + 1 < self.num_rows).then(|| CellId(index + self.num_columns));
            let east = (column + 1 < self.num_columns).then(|| CellId(index + 1));
            let west = (column > 0).then(|| CellId(index - 1));
            self.cells[index].set_neighbors(north, south, east, west);
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// How many cells are in the grid.
    pub fn size(&self) -> usize {
        self.num_rows * self.num_columns
    }

    /// The cell at a row/column position, or `None` when out of bounds.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<CellId> {
        if row < self.num_rows && column < self.num_columns {
            Some(CellId(row * self.num_columns + column))
        } else {
            None
        }
    }

    /// Carves a passage between two cells. The relation is stored on both
    /// sides; this is the only place that has to keep it symmetric.
    /// Idempotent, and does not verify that the cells are geographic
    /// neighbors (the generators only ever link adjacent cells).
    pub fn link(&mut self, a: CellId, b: CellId) {
        self.cells[a.0].add_link(b);
        self.cells[b.0].add_link(a);
    }

    /// Removes a carved passage from both sides. Fails if the cells are
    /// not currently linked.
    pub fn unlink(&mut self, a: CellId, b: CellId) -> Result<(), MazeError> {
        if !self.cells[a.0].remove_link(b) {
            return Err(MazeError::NotLinked(a, b));
        }
        self.cells[b.0].remove_link(a);
        Ok(())
    }

    pub fn is_linked(&self, a: CellId, b: CellId) -> bool {
        self.cells[a.0].is_linked(b)
    }

    /// All cells with exactly one link.
    pub fn deadends(&self) -> Vec<CellId> {
        self.each_cell()
            .filter(|&id| self[id].link_count() == 1)
            .collect()
    }

    /// A fresh row-major traversal over every cell. Each call starts over;
    /// no cursor state is shared between calls.
    pub fn each_cell(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    /// A fresh traversal over rows, top to bottom, each row west to east.
    pub fn each_row(&self) -> impl Iterator<Item = impl Iterator<Item = CellId>> {
        let num_columns = self.num_columns;
        (0..self.num_rows)
            .map(move |row| (0..num_columns).map(move |column| CellId(row * num_columns + column)))
    }

    /// Chooses one cell uniformly, via independent draws over the row and
    /// column index. Uniform only because the grid is rectangular.
    pub fn random_cell(&self, rng: &mut impl Rng) -> CellId {
        let row = rng.random_range(0..self.num_rows);
        let column = rng.random_range(0..self.num_columns);
        CellId(row * self.num_columns + column)
    }
}

impl std::ops::Index<CellId> for Grid {
    type Output = Cell;

    fn index(&self, index: CellId) -> &Self::Output {
        &self.cells[index.0]
    }
}
