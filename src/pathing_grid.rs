use crate::coord::Coord;
use crate::error::GridError;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// Read access to a rectangular grid of cells, as far as the search is concerned: its size and
/// which cells are obstacles.
pub trait GridMap {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Only called for in-bounds coordinates.
    fn is_obstacle(&self, coord: Coord) -> bool;

    fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows() && coord.col < self.cols()
    }
    fn is_traversable(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_obstacle(coord)
    }
    fn check_bounds(&self, coord: Coord) -> Result<(), GridError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
    /// Cheap connectivity answer if the grid has one. [None] means unknown, in which case
    /// the search itself has to find out.
    fn reachable(&self, _start: Coord, _goal: Coord) -> Option<bool> {
        None
    }
}

/// The states a cell can be painted with on the canvas. Start, goal and path markers are
/// cosmetic: only [CellState::Obstacle] blocks movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    Goal,
    Obstacle,
    Path,
}

impl CellState {
    pub fn is_obstacle(self) -> bool {
        self == CellState::Obstacle
    }
}

/// The numeric codes used by the painting canvas.
impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(code: u8) -> Result<CellState, GridError> {
        match code {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Start),
            2 => Ok(CellState::Goal),
            3 => Ok(CellState::Obstacle),
            4 => Ok(CellState::Path),
            other => Err(GridError::UnknownCellCode(other)),
        }
    }
}

/// [ObstacleGrid] stores which cells are blocked ([true]) in a [BoolGrid] and keeps track of
/// 4-connected components in a [UnionFind] structure so unreachable goals can be rejected
/// without a search.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    rows: usize,
    cols: usize,
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl ObstacleGrid {
    /// An obstacle-free grid.
    pub fn new(rows: usize, cols: usize) -> Result<ObstacleGrid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        // Cells are addressed with i32 points in the backing grid.
        let fits = |n: usize| i32::try_from(n).is_ok();
        let cells = rows
            .checked_mul(cols)
            .filter(|_| fits(rows) && fits(cols))
            .ok_or(GridError::TooLarge { rows, cols })?;
        let mut grid = ObstacleGrid {
            rows,
            cols,
            grid: BoolGrid::new(cols, rows, false),
            components: UnionFind::new(cells),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from row-major obstacle flags.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<ObstacleGrid, GridError> {
        Self::from_cells::<bool, R, _>(rows, |&blocked| blocked)
    }

    /// Builds a grid from painted canvas cells, keeping only the obstacles.
    pub fn from_states<R: AsRef<[CellState]>>(rows: &[R]) -> Result<ObstacleGrid, GridError> {
        Self::from_cells::<CellState, R, _>(rows, |state| state.is_obstacle())
    }

    fn from_cells<T, R, F>(rows: &[R], blocked: F) -> Result<ObstacleGrid, GridError>
    where
        R: AsRef<[T]>,
        F: Fn(&T) -> bool,
    {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = ObstacleGrid::new(rows.len(), expected)?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != expected {
                return Err(GridError::RaggedRows {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                if blocked(cell) {
                    grid.grid.set_point(Coord::new(row, col).to_point(), true);
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Updates a cell. Joins newly connected components when a cell is cleared and flags the
    /// components as dirty when a free cell is blocked, since that may split a component.
    pub fn set(&mut self, coord: Coord, blocked: bool) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        let was_blocked = self.is_obstacle(coord);
        self.grid.set_point(coord.to_point(), blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = self.index(coord);
            for n in coord.neumann_neighborhood() {
                if self.is_traversable(n) {
                    self.components.union(ix, self.index(n));
                }
            }
        }
        Ok(())
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let point = Coord::new(row, col);
            if self.is_obstacle(point) {
                continue;
            }
            let ix = self.index(point);
            // East and south suffice, west and north were handled from the other side.
            for n in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                if self.is_traversable(n) {
                    self.components.union(ix, self.index(n));
                }
            }
        }
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn component(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| self.components.find(self.index(coord)))
    }

    /// All obstacle cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        iproduct!(0..self.rows, 0..self.cols)
            .map(|(row, col)| Coord::new(row, col))
            .filter(|&c| self.is_obstacle(c))
    }
}

impl GridMap for ObstacleGrid {
    fn rows(&self) -> usize {
        self.rows
    }
    fn cols(&self) -> usize {
        self.cols
    }
    fn is_obstacle(&self, coord: Coord) -> bool {
        self.grid.get_point(coord.to_point())
    }
    /// Answers from the components, as long as they are not dirty.
    fn reachable(&self, start: Coord, goal: Coord) -> Option<bool> {
        if self.components_dirty || !self.in_bounds(start) || !self.in_bounds(goal) {
            return None;
        }
        Some(
            !self.is_obstacle(start)
                && !self.is_obstacle(goal)
                && self
                    .components
                    .equiv(self.index(start), self.index(goal)),
        )
    }
}

/// Parses one line per row. `.`, `S`, `G` and `*` are free cells, `#`, `@`, `T` and `X` are
/// obstacles. Blank lines are skipped.
impl FromStr for ObstacleGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<ObstacleGrid, GridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '.' | 'S' | 'G' | '*' => Ok(false),
                        '#' | '@' | 'T' | 'X' => Ok(true),
                        _ => Err(GridError::UnknownTile { ch, row, col }),
                    })
                    .collect::<Result<Vec<bool>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        ObstacleGrid::from_rows(&rows)
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| {
                    if self.is_obstacle(Coord::new(row, col)) {
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

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // A wall splits the grid into a left and a right half:
        // .#.
        // .#.
        let grid: ObstacleGrid = ".#.\n.#.".parse().unwrap();
        let left_top = Coord::new(0, 0);
        let left_bottom = Coord::new(1, 0);
        let right = Coord::new(0, 2);
        assert_eq!(grid.component(left_top), grid.component(left_bottom));
        assert_ne!(grid.component(left_top), grid.component(right));
        assert_eq!(grid.reachable(left_top, left_bottom), Some(true));
        assert_eq!(grid.reachable(left_top, right), Some(false));
        // Obstacles are never reachable, even though they have a component of their own.
        assert_eq!(grid.reachable(left_top, Coord::new(0, 1)), Some(false));
    }

    #[test]
    fn blocking_marks_components_dirty() {
        let mut grid = ObstacleGrid::new(3, 3).unwrap();
        assert!(!grid.components_dirty());
        for row in 0..3 {
            grid.set(Coord::new(row, 1), true).unwrap();
        }
        assert!(grid.components_dirty());
        assert_eq!(grid.reachable(Coord::new(0, 0), Coord::new(0, 2)), None);
        grid.update();
        assert_eq!(
            grid.reachable(Coord::new(0, 0), Coord::new(0, 2)),
            Some(false)
        );
    }

    #[test]
    fn clearing_joins_components() {
        let mut grid: ObstacleGrid = ".#.\n.#.\n.#.".parse().unwrap();
        assert_eq!(
            grid.reachable(Coord::new(0, 0), Coord::new(0, 2)),
            Some(false)
        );
        grid.set(Coord::new(2, 1), false).unwrap();
        assert!(!grid.components_dirty());
        assert_eq!(
            grid.reachable(Coord::new(0, 0), Coord::new(0, 2)),
            Some(true)
        );
    }

    #[test]
    fn reblocking_an_obstacle_does_not_connect_through_it() {
        let mut grid: ObstacleGrid = ".#.".parse().unwrap();
        grid.set(Coord::new(0, 1), true).unwrap();
        assert!(!grid.components_dirty());
        assert_eq!(
            grid.reachable(Coord::new(0, 0), Coord::new(0, 2)),
            Some(false)
        );
    }

    #[test]
    fn construction_errors() {
        assert_eq!(ObstacleGrid::new(0, 3).unwrap_err(), GridError::Empty);
        assert_eq!(
            ObstacleGrid::from_rows::<Vec<bool>>(&[]).unwrap_err(),
            GridError::Empty
        );
        assert_eq!(
            ObstacleGrid::from_rows(&[vec![false, false], vec![false]]).unwrap_err(),
            GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            "..\n.?".parse::<ObstacleGrid>().unwrap_err(),
            GridError::UnknownTile {
                ch: '?',
                row: 1,
                col: 1
            }
        );
        assert_eq!(
            ObstacleGrid::new(usize::MAX, 2).unwrap_err(),
            GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert!(matches!(
            ObstacleGrid::new(1, i32::MAX as usize + 1),
            Err(GridError::TooLarge { .. })
        ));
        let mut grid = ObstacleGrid::new(2, 2).unwrap();
        assert_eq!(
            grid.set(Coord::new(2, 0), true).unwrap_err(),
            GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn presentation_states_do_not_block() {
        use CellState::*;
        let grid = ObstacleGrid::from_states(&[
            vec![Start, Path, Obstacle],
            vec![Empty, Goal, Path],
        ])
        .unwrap();
        assert_eq!(grid.obstacles().collect::<Vec<_>>(), vec![Coord::new(0, 2)]);
        assert_eq!(CellState::try_from(3), Ok(Obstacle));
        assert_eq!(CellState::try_from(7), Err(GridError::UnknownCellCode(7)));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "S.#\n.#G\n...\n";
        let grid: ObstacleGrid = text.parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.to_string(), "..#\n.#.\n...\n");
        assert!(!grid.is_traversable(Coord::new(3, 0)));
        assert!(!grid.is_traversable(Coord::new(0, 2)));
        assert!(grid.is_traversable(Coord::new(1, 2)));
    }
}
