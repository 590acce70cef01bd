pub mod cell;
mod grid;

pub use cell::{Cell, CellId};
pub use grid::Grid;
