use super::Markup;
use super::dijkstra::compute_distances;
use crate::error::MazeError;
use crate::maze::{CellId, Grid};

/// An RGB triplet, one byte per channel.
pub type Rgb = [u8; 3];

/// Which channel carries the bright component of an intensity gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

/// Maps a numeric markup into an RGB gradient keyed to its maximum value.
///
/// For a cell with value `v` and field maximum `max`, the intensity is
/// `(max - v) / max`, so cells near the field's root come out brightest. The
/// chosen channel gets `round(127 * intensity) + 128`, the other two get
/// `round(255 * intensity)`. Cells the source never set read as the
/// default 0 and therefore colorize at full intensity.
///
/// Fails with [`MazeError::EmptyMarkup`] when nothing is set in `source`
/// and with [`MazeError::ZeroIntensityRange`] when the maximum is 0 (the
/// gradient would divide by zero).
pub fn intensity_colorize(
    grid: &Grid,
    source: &Markup<u32>,
    channel: Channel,
) -> Result<Markup<Rgb>, MazeError> {
    let max_cell = source.max().ok_or(MazeError::EmptyMarkup)?;
    let max_value = *source.get(max_cell);
    if max_value == 0 {
        return Err(MazeError::ZeroIntensityRange);
    }

    let mut colors = Markup::new(grid, [0u8; 3]);
    for cell in grid.each_cell() {
        let value = *source.get(cell);
        let intensity = f64::from(max_value - value) / f64::from(max_value);
        let dark = (255.0 * intensity).round() as u8;
        let bright = (127.0 * intensity).round() as u8 + 128;
        let rgb = match channel {
            Channel::Red => [bright, dark, dark],
            Channel::Green => [dark, bright, dark],
            Channel::Blue => [dark, dark, bright],
        };
        colors.set(cell, rgb);
    }
    Ok(colors)
}

/// Colorizes the grid by link-distance from `root`.
pub fn colorize_distances(
    grid: &Grid,
    root: CellId,
    channel: Channel,
) -> Result<Markup<Rgb>, MazeError> {
    let distances = compute_distances(grid, root);
    intensity_colorize(grid, &distances, channel)
}

/// Colorizes the grid by link-distance from the center cell.
pub fn colorize_from_center(grid: &Grid, channel: Channel) -> Result<Markup<Rgb>, MazeError> {
    let root = grid
        .cell_at(grid.num_rows() / 2, grid.num_columns() / 2)
        .expect("the center cell is always in bounds");
    colorize_distances(grid, root, channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_extremes() {
        // 1x3 corridor: distances 0, 1, 2 from the west end.
        let mut grid = Grid::new(1, 3).unwrap();
        grid.link(grid.cell_at(0, 0).unwrap(), grid.cell_at(0, 1).unwrap());
        grid.link(grid.cell_at(0, 1).unwrap(), grid.cell_at(0, 2).unwrap());

        let colors = colorize_distances(&grid, grid.cell_at(0, 0).unwrap(), Channel::Red).unwrap();
        // Root: intensity 1.0 -> brightest.
        assert_eq!(*colors.get(grid.cell_at(0, 0).unwrap()), [255, 255, 255]);
        // Farthest: intensity 0.0 -> pure channel floor.
        assert_eq!(*colors.get(grid.cell_at(0, 2).unwrap()), [128, 0, 0]);
        // Midpoint: intensity 0.5 -> dark 128, bright 64 + 128.
        assert_eq!(*colors.get(grid.cell_at(0, 1).unwrap()), [192, 128, 128]);
    }

    #[test]
    fn test_channel_selection() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.link(grid.cell_at(0, 0).unwrap(), grid.cell_at(0, 1).unwrap());
        let far = grid.cell_at(0, 1).unwrap();

        let green = colorize_distances(&grid, grid.cell_at(0, 0).unwrap(), Channel::Green).unwrap();
        assert_eq!(*green.get(far), [0, 128, 0]);
        let blue = colorize_distances(&grid, grid.cell_at(0, 0).unwrap(), Channel::Blue).unwrap();
        assert_eq!(*blue.get(far), [0, 0, 128]);
    }

    #[test]
    fn test_center_default_root() {
        // 1x3 corridor: center is (0, 1), both ends sit at distance 1.
        let mut grid = Grid::new(1, 3).unwrap();
        grid.link(grid.cell_at(0, 0).unwrap(), grid.cell_at(0, 1).unwrap());
        grid.link(grid.cell_at(0, 1).unwrap(), grid.cell_at(0, 2).unwrap());

        let colors = colorize_from_center(&grid, Channel::Red).unwrap();
        assert_eq!(*colors.get(grid.cell_at(0, 1).unwrap()), [255, 255, 255]);
        assert_eq!(*colors.get(grid.cell_at(0, 0).unwrap()), [128, 0, 0]);
        assert_eq!(*colors.get(grid.cell_at(0, 2).unwrap()), [128, 0, 0]);
    }

    #[test]
    fn test_degenerate_sources_fail() {
        let grid = Grid::new(2, 2).unwrap();
        let empty: Markup<u32> = Markup::new(&grid, 0);
        assert_eq!(
            intensity_colorize(&grid, &empty, Channel::Red).unwrap_err(),
            MazeError::EmptyMarkup
        );

        // Unlinked grid: a distance field holds only the root at 0.
        let root = grid.cell_at(0, 0).unwrap();
        assert_eq!(
            colorize_distances(&grid, root, Channel::Red).unwrap_err(),
            MazeError::ZeroIntensityRange
        );
    }
}
