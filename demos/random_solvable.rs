use grid_astar::generate::random_solvable_grid;
use grid_astar::{Coord, PathFinder};
use rand::{rngs::StdRng, SeedableRng};

// Generates random obstacle layouts until the corners are connected, then shows the shortest
// path between them.

fn main() {
    const ROWS: usize = 20;
    const COLS: usize = 30;
    let mut rng = StdRng::seed_from_u64(42);
    let start = Coord::new(0, 0);
    let goal = Coord::new(ROWS - 1, COLS - 1);
    let grid = random_solvable_grid(ROWS, COLS, 0.35, start, goal, 1000, &mut rng).unwrap();
    let path = PathFinder::default()
        .find_path(&grid, start, goal)
        .unwrap()
        .unwrap();
    println!("{}", path.overlay(&grid));
    println!("{} steps", path.steps());
}
