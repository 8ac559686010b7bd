use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// A cell position on a grid, `row` first. Rows grow downwards and columns to the right, both
/// starting at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Row and column offsets of the 4-neighbourhood, in expansion order: west, east, north, south.
const NEUMANN_DELTAS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr.hypot(dc)
    }

    /// Orthogonal neighbours in the order west, east, north, south. Neighbours left of column 0
    /// or above row 0 are left out; the grid decides about the far edges.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coord; 4]> {
        NEUMANN_DELTAS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some(Coord::new(
                    self.row.checked_add_signed(dr)?,
                    self.col.checked_add_signed(dc)?,
                ))
            })
            .collect()
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The [Point] addressing this cell in a `grid_util` grid, where `x` is the column and `y`
    /// the row.
    pub(crate) fn to_point(self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
