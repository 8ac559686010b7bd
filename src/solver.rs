use crate::astar::astar;
use crate::config::SearchConfig;
use crate::coord::Coord;
use crate::error::GridError;
use crate::path::Path;
use crate::pathing_grid::GridMap;
use crate::STEP_COST;
use log::{debug, info};
use smallvec::SmallVec;

/// A* over a 4-connected grid where every step costs the same.
///
/// Ties between frontier cells are broken deterministically: lowest estimated total cost first,
/// then the highest cost so far, then the earliest inserted. Neighbours are visited west, east,
/// north, south, so repeated searches on the same grid return the same path.
///
/// The finder holds no search state between calls: open set, closed set and score maps live only
/// for the duration of one [find_path](Self::find_path), so one finder can serve any number of
/// grids and threads.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    pub config: SearchConfig,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> PathFinder {
        PathFinder { config }
    }

    fn successors<G: GridMap + ?Sized>(grid: &G, node: &Coord) -> SmallVec<[(Coord, i64); 4]> {
        node.neumann_neighborhood()
            .into_iter()
            .filter(|n| grid.is_traversable(*n))
            .map(|n| (n, STEP_COST))
            .collect()
    }

    /// Computes a minimum-step path from `start` to `goal`, both included.
    ///
    /// Returns `Ok(None)` if no path exists: when start or goal is an obstacle, when the grid's
    /// components show the goal cannot be reached, or when the search exhausts its frontier or
    /// its expansion budget. Coordinates outside the grid and invalid configurations are
    /// reported as errors instead.
    pub fn find_path<G: GridMap + ?Sized>(
        &self,
        grid: &G,
        start: Coord,
        goal: Coord,
    ) -> Result<Option<Path>, GridError> {
        self.config.validate()?;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if grid.is_obstacle(start) || grid.is_obstacle(goal) {
            debug!("Start {} or goal {} is an obstacle", start, goal);
            return Ok(None);
        }
        if start == goal {
            return Ok(Some(Path::from_cells(vec![start])));
        }
        if self.config.use_components && grid.reachable(start, goal) == Some(false) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let outcome = astar(
            &start,
            |node| Self::successors(grid, node),
            |node| self.config.estimate(node, &goal),
            |node| *node == goal,
            self.config.max_expansions,
        );
        if outcome.truncated {
            info!(
                "Search {} -> {} stopped after {} expansions",
                start, goal, outcome.expanded
            );
        } else {
            debug!(
                "Search {} -> {} expanded {} cells",
                start, goal, outcome.expanded
            );
        }
        Ok(outcome.path.map(|(cells, _cost)| Path::from_cells(cells)))
    }
}
