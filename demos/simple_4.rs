use grid_astar::{Coord, GridMap, ObstacleGrid, PathFinder};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S#G|
// | # |
// |   |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// The only way across the wall is the gap in the bottom row.

fn main() {
    let mut grid = ObstacleGrid::new(3, 3).unwrap();
    grid.set(Coord::new(0, 1), true).unwrap();
    grid.set(Coord::new(1, 1), true).unwrap();
    grid.update();
    println!("{}", grid);
    let start = Coord::new(0, 0);
    let goal = Coord::new(0, 2);
    match PathFinder::default().find_path(&grid, start, goal).unwrap() {
        Some(path) => {
            println!("Path of {} steps:", path.steps());
            for c in &path {
                println!("{}", c);
            }
            println!("\n{}", path.overlay(&grid));
        }
        None => println!("No path from {} to {}", start, goal),
    }
    // Closing the gap separates start and goal.
    grid.set(Coord::new(2, 1), true).unwrap();
    grid.update();
    assert!(!grid.is_traversable(Coord::new(2, 1)));
    let path = PathFinder::default().find_path(&grid, start, goal).unwrap();
    println!("After closing the gap: {:?}", path);
}
