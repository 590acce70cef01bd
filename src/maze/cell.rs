use std::fmt;

/// Stable identity of a cell within its grid: the row-major index
/// `row * num_columns + column`.
///
/// The derived `Ord` is exactly row-major order (lower row first, then
/// lower column), which is what priority-queue tie-breaking relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// The raw row-major index, usable for addressing per-cell side tables.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single lattice node. Cells know their (up to four) geographic
/// neighbors, wired once at grid construction, and the set of cells they
/// are linked to, a link being a carved maze passage.
///
/// The neighbor relations are fixed topology; the link set is the maze.
/// Linking only ever targets geographic neighbors, so the set holds at
/// most four entries.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    column: usize,
    north: Option<CellId>,
    south: Option<CellId>,
    east: Option<CellId>,
    west: Option<CellId>,
    links: Vec<CellId>,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Cell {
            row,
            column,
            north: None,
            south: None,
            east: None,
            west: None,
            links: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn north(&self) -> Option<CellId> {
        self.north
    }

    pub fn south(&self) -> Option<CellId> {
        self.south
    }

    pub fn east(&self) -> Option<CellId> {
        self.east
    }

    pub fn west(&self) -> Option<CellId> {
        self.west
    }

    pub(crate) fn set_neighbors(
        &mut self,
        north: Option<CellId>,
        south: Option<CellId>,
        east: Option<CellId>,
        west: Option<CellId>,
    ) {
        self.north = north;
        self.south = south;
        self.east = east;
        self.west = west;
    }

    /// Whether a passage to `other` has been carved.
    pub fn is_linked(&self, other: CellId) -> bool {
        self.links.contains(&other)
    }

    /// All cells this cell is linked to. Iteration order is insertion
    /// order and carries no meaning beyond membership.
    pub fn all_links(&self) -> &[CellId] {
        &self.links
    }

    /// Number of linked cells. A cell with exactly one link is a dead end.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The geographic neighbors that exist, in fixed north, south, east,
    /// west order.
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> {
        [self.north, self.south, self.east, self.west]
            .into_iter()
            .flatten()
    }

    /// Idempotent on the set level: linking an already-linked cell again
    /// changes nothing.
    pub(crate) fn add_link(&mut self, other: CellId) {
        if !self.links.contains(&other) {
            self.links.push(other);
        }
    }

    /// Returns false if `other` was not linked.
    pub(crate) fn remove_link(&mut self, other: CellId) -> bool {
        match self.links.iter().position(|&id| id == other) {
            Some(pos) => {
                self.links.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell at {}, {}", self.row, self.column)
    }
}
