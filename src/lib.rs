//! Perfect-maze generation and analysis on a rectangular lattice.
//!
//! A [`Grid`](maze::Grid) owns a fixed lattice of cells; the
//! [`generators`] carve a spanning tree into its link relation (a perfect
//! maze: exactly one simple path between any two cells); the [`markup`]
//! overlays compute annotations over the result (distance fields,
//! shortest and longest paths, and color gradients) without touching the
//! grid itself. Rendering the grid and markups to a terminal or image is
//! left to consumers of the read-only query surface.
//!
//! ```
//! use mazekit::generators::{Generator, generate_maze};
//! use mazekit::markup::{compute_distances, farthest_cell};
//! use mazekit::maze::Grid;
//!
//! let mut grid = Grid::new(8, 8)?;
//! generate_maze(&mut grid, Generator::Wilson, Some(42))?;
//!
//! let start = grid.cell_at(0, 0).unwrap();
//! let distances = compute_distances(&grid, start);
//! let (cell, distance) = farthest_cell(&distances).unwrap();
//! assert!(distance > 0);
//! assert!(distances.is_set(cell));
//! # Ok::<(), mazekit::MazeError>(())
//! ```

pub mod error;
pub mod generators;
pub mod markup;
pub mod maze;

pub use error::MazeError;
pub use maze::{Cell, CellId, Grid};
