//! Random obstacle layouts for demos, benchmarks and fuzzing.
use crate::coord::Coord;
use crate::error::GridError;
use crate::pathing_grid::{GridMap, ObstacleGrid};
use log::{debug, info};
use rand::Rng;

/// Blocks every cell independently with probability `density`.
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Result<ObstacleGrid, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity(density));
    }
    let cells = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(density)).collect::<Vec<bool>>())
        .collect::<Vec<_>>();
    ObstacleGrid::from_rows(&cells)
}

/// Draws random layouts until `start` and `goal` end up on the same connected component. Both
/// cells are always kept free. Connectivity comes from the grid's components, no search is run.
pub fn random_solvable_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    start: Coord,
    goal: Coord,
    max_attempts: usize,
    rng: &mut R,
) -> Result<ObstacleGrid, GridError> {
    for attempt in 1..=max_attempts {
        let mut grid = random_grid(rows, cols, density, rng)?;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        grid.set(start, false)?;
        grid.set(goal, false)?;
        // Clearing only joins components, so they are still clean here.
        if grid.reachable(start, goal) == Some(true) {
            info!("Solvable layout found after {} attempts", attempt);
            return Ok(grid);
        }
        debug!("Attempt {}: {} cannot reach {}", attempt, start, goal);
    }
    Err(GridError::Unsolvable {
        attempts: max_attempts,
    })
}

/// Share of blocked cells.
pub fn density(grid: &ObstacleGrid) -> f64 {
    let total = grid.rows() * grid.cols();
    grid.obstacles().count() as f64 / total as f64
}
