use grid_astar::{Coord, HeuristicKind, ObstacleGrid, PathFinder, SearchConfig};

// The heuristic is chosen per search through the SearchConfig. Both heuristics give paths of
// the same length; the Euclidean one is less informed on a 4-connected grid. A heuristic_factor
// above 1.0 turns the search into Weighted A*, which may return a longer path.

fn main() {
    let grid: ObstacleGrid = "\
        ..............
        .##########...
        .........#....
        .#######.#.###
        .#.......#....
        .#.#######.#..
        ..............
    "
    .parse()
    .unwrap();
    let start = Coord::new(2, 0);
    let goal = Coord::new(4, 13);
    for config in [
        SearchConfig::default().with_heuristic(HeuristicKind::Manhattan),
        SearchConfig::default().with_heuristic(HeuristicKind::Euclidean),
        SearchConfig::default().with_heuristic_factor(1.5),
    ] {
        let path = PathFinder::new(config.clone())
            .find_path(&grid, start, goal)
            .unwrap()
            .unwrap();
        println!(
            "{:?}, factor {}: {} steps",
            config.heuristic,
            config.heuristic_factor,
            path.steps()
        );
        println!("{}", path.overlay(&grid));
    }
}
