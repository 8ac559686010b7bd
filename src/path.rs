use crate::coord::Coord;
use crate::pathing_grid::GridMap;
use core::fmt;
use itertools::Itertools;

/// Cells from start to goal, both included, each one orthogonal step from the previous one.
/// A path always holds at least one cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Coord>);

impl Path {
    pub(crate) fn from_cells(cells: Vec<Coord>) -> Path {
        debug_assert!(!cells.is_empty());
        Path(cells)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn start(&self) -> Coord {
        self.0[0]
    }

    pub fn goal(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }

    pub fn is_step_connected(&self) -> bool {
        self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    /// Renders `grid` with this path drawn on top of it.
    pub fn overlay<'a, G: GridMap + ?Sized>(&'a self, grid: &'a G) -> PathOverlay<'a, G> {
        PathOverlay { path: self, grid }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// [Display](fmt::Display) adapter returned by [Path::overlay]: `S` start, `G` goal, `*` path,
/// `#` obstacle and `.` anything else.
pub struct PathOverlay<'a, G: ?Sized> {
    path: &'a Path,
    grid: &'a G,
}

impl<G: GridMap + ?Sized> fmt::Display for PathOverlay<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() {
            let line = (0..self.grid.cols())
                .map(|col| {
                    let c = Coord::new(row, col);
                    if c == self.path.start() {
                        'S'
                    } else if c == self.path.goal() {
                        'G'
                    } else if self.path.contains(c) {
                        '*'
                    } else if self.grid.is_obstacle(c) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
