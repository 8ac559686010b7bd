use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::generate::random_solvable_grid;
use grid_astar::{Coord, HeuristicKind, ObstacleGrid, PathFinder, SearchConfig};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_GRIDS: usize = 16;

fn scenarios() -> Vec<(ObstacleGrid, Coord, Coord)> {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let goal = Coord::new(N - 1, N - 1);
    (0..N_GRIDS)
        .map(|_| {
            let grid = random_solvable_grid(N, N, 0.3, start, goal, 10_000, &mut rng).unwrap();
            (grid, start, goal)
        })
        .collect()
}

fn heuristic_bench(c: &mut Criterion) {
    let scenarios = scenarios();
    for (name, heuristic) in [
        ("Manhattan", HeuristicKind::Manhattan),
        ("Euclidean", HeuristicKind::Euclidean),
    ] {
        for use_components in [true, false] {
            let mut config = SearchConfig::default().with_heuristic(heuristic);
            config.use_components = use_components;
            let finder = PathFinder::new(config);
            let components_str = if use_components { "" } else { " (no components)" };
            c.bench_function(
                format!("{N}x{N} random, {name}{components_str}").as_str(),
                |b| {
                    b.iter(|| {
                        for (grid, start, goal) in &scenarios {
                            black_box(finder.find_path(grid, *start, *goal).unwrap());
                        }
                    })
                },
            );
        }
    }
}

fn weighted_bench(c: &mut Criterion) {
    let scenarios = scenarios();
    for factor in [1.0, 1.5, 2.0] {
        let finder = PathFinder::new(SearchConfig::default().with_heuristic_factor(factor));
        c.bench_function(format!("{N}x{N} random, weight {factor}").as_str(), |b| {
            b.iter(|| {
                for (grid, start, goal) in &scenarios {
                    black_box(finder.find_path(grid, *start, *goal).unwrap());
                }
            })
        });
    }
}

criterion_group!(benches, heuristic_bench, weighted_bench);
criterion_main!(benches);
