use super::Markup;
use super::dijkstra::{compute_distances, farthest_cell};
use crate::generators::get_rng;
use crate::maze::{CellId, Grid};

/// The three marker values a path markup assigns: cells on the path, cells
/// off it, and the two endpoints.
#[derive(Debug, Clone)]
pub struct PathMarkers<T> {
    pub path: T,
    pub non_path: T,
    pub end: T,
}

impl Default for PathMarkers<char> {
    fn default() -> Self {
        PathMarkers {
            path: '*',
            non_path: ' ',
            end: '^',
        }
    }
}

/// Marks the shortest path between `start` and `goal` over the link graph.
///
/// Runs a distance sweep from `start`, then walks backward from `goal`,
/// stepping to the linked neighbor with the smallest recorded distance. On
/// a spanning tree exactly one neighbor is closer to the start, so the walk
/// is unambiguous. Every cell is marked: path cells with `markers.path`,
/// the rest with `markers.non_path`, and both endpoints with `markers.end`.
///
/// `goal` must be reachable from `start` through links; the backward walk
/// does not terminate otherwise. Mazes produced by the generators are
/// single spanning trees, so any two of their cells qualify.
pub fn compute_shortest_path<T: Clone>(
    grid: &Grid,
    start: CellId,
    goal: CellId,
    markers: &PathMarkers<T>,
) -> Markup<T> {
    let distances = compute_distances(grid, start);

    let mut path = Markup::new(grid, markers.non_path.clone());
    for cell in grid.each_cell() {
        path.set(cell, markers.non_path.clone());
    }

    let mut current = goal;
    while current != start {
        path.set(current, markers.path.clone());
        current = grid[current]
            .all_links()
            .iter()
            .copied()
            .min_by_key(|&link| *distances.get(link))
            .expect("cells on a backward walk always have at least one link");
    }

    path.set(start, markers.end.clone());
    path.set(goal, markers.end.clone());
    path
}

/// Marks the longest path found anywhere in the maze.
///
/// Double sweep: distances from a random cell pick out one endpoint, and
/// distances from that endpoint pick out the other; the shortest path
/// between the two is then marked. On a tree this is the exact diameter,
/// though which endpoints win among equally long paths depends on
/// tie-breaking. `seed` feeds the starting-cell draw for replay.
pub fn compute_longest_path<T: Clone>(
    grid: &Grid,
    markers: &PathMarkers<T>,
    seed: Option<u64>,
) -> Markup<T> {
    let mut rng = get_rng(seed);
    let root = grid.random_cell(&mut rng);

    let distances = compute_distances(grid, root);
    let (first_end, _) = farthest_cell(&distances).unwrap_or((root, 0));
    let distances = compute_distances(grid, first_end);
    let (second_end, _) = farthest_cell(&distances).unwrap_or((first_end, 0));

    compute_shortest_path(grid, first_end, second_end, markers)
}
