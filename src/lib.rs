//! # grid_astar
//!
//! Shortest paths on a rectangular obstacle grid with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 4-connected (no
//! diagonals) and every step has the same cost, so a path found with an admissible heuristic
//! has the minimum number of steps. Connected components are tracked on the grid to reject
//! unreachable goals without flood-filling the whole map.
//!
//! ```
//! use grid_astar::{find_path, Coord, ObstacleGrid, SearchConfig};
//!
//! // A wall with a gap in the bottom row.
//! let grid: ObstacleGrid = ".#.\n.#.\n...".parse().unwrap();
//! let path = find_path(&grid, Coord::new(0, 0), Coord::new(0, 2), &SearchConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.steps(), 6);
//! assert!(path.contains(Coord::new(2, 1)));
//! ```
mod astar;
pub mod config;
pub mod coord;
pub mod error;
pub mod generate;
pub mod path;
pub mod pathing_grid;
pub mod solver;

pub use config::{HeuristicKind, SearchConfig};
pub use coord::Coord;
pub use error::GridError;
pub use path::Path;
pub use pathing_grid::{CellState, GridMap, ObstacleGrid};
pub use solver::PathFinder;

/// Cost of a single step. Heuristics are expressed in the same unit, which keeps fractional
/// estimates such as the Euclidean distance comparable as integers.
pub const STEP_COST: i64 = 100;

/// Computes a minimum-step path from `start` to `goal` on `grid`. See [PathFinder::find_path].
pub fn find_path<G: GridMap + ?Sized>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
) -> Result<Option<Path>, GridError> {
    PathFinder::new(config.clone()).find_path(grid, start, goal)
}
