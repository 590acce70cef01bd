use rand::{SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod hybrid;
mod recur_backtrack;
mod sidewinder;
mod wilson;

pub use aldous_broder::aldous_broder;
pub use binary_tree::binary_tree;
pub use hybrid::hybrid;
pub use recur_backtrack::recursive_backtracker;
pub use sidewinder::sidewinder;
pub use wilson::wilson;

use crate::error::MazeError;
use crate::maze::{CellId, Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The available maze generation strategies, with their parameters.
///
/// Every strategy consumes a freshly constructed, unlinked grid and carves
/// a perfect maze: a spanning tree over the lattice, every cell reachable
/// from every other by exactly one simple path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    BinaryTree,
    Sidewinder { odds: f64 },
    AldousBroder,
    Wilson,
    Hybrid { threshold: f64 },
    RecurBacktrack { start: Option<CellId> },
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder { .. } => write!(f, "Sidewinder"),
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Hybrid { .. } => write!(f, "Hybrid Aldous-Broder/Wilson"),
            Generator::RecurBacktrack { .. } => write!(f, "Recursive Backtracker"),
        }
    }
}

/// Carves a maze into `grid` with the chosen strategy. Fails only on
/// invalid strategy parameters; the grid is untouched in that case.
pub fn generate_maze(
    grid: &mut Grid,
    generator: Generator,
    seed: Option<u64>,
) -> Result<(), MazeError> {
    match generator {
        Generator::BinaryTree => {
            binary_tree(grid, seed);
            Ok(())
        }
        Generator::Sidewinder { odds } => sidewinder(grid, odds, seed),
        Generator::AldousBroder => {
            aldous_broder(grid, seed);
            Ok(())
        }
        Generator::Wilson => {
            wilson(grid, seed);
            Ok(())
        }
        Generator::Hybrid { threshold } => hybrid(grid, threshold, seed),
        Generator::RecurBacktrack { start } => {
            recursive_backtracker(grid, start, seed);
            Ok(())
        }
    }
}
