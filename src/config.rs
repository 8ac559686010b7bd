use crate::coord::Coord;
use crate::error::GridError;
use crate::STEP_COST;

/// Distance estimate used to guide the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Exact on an empty 4-connected grid, so it expands the fewest cells.
    #[default]
    Manhattan,
    /// Straight-line distance. Never larger than the Manhattan distance, so paths stay
    /// shortest, but the search is less focused and expands more cells.
    Euclidean,
}

impl HeuristicKind {
    /// Estimate in [STEP_COST] units, truncated towards zero and saturating at [i64::MAX].
    pub fn estimate(self, from: &Coord, to: &Coord) -> i64 {
        match self {
            HeuristicKind::Manhattan => i64::try_from(from.manhattan_distance(to))
                .map_or(i64::MAX, |d| d.saturating_mul(STEP_COST)),
            HeuristicKind::Euclidean => (from.euclidean_distance(to) * STEP_COST as f64) as i64,
        }
    }
}

/// Upper bound on the heuristic factor at which paths are still guaranteed to be shortest.
pub const ADMISSIBLE_HEURISTIC_FACTOR: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: HeuristicKind,
    /// Scales the heuristic. Above 1.0 this is Weighted A*: fewer expansions, but the returned
    /// path may be longer than the shortest one.
    pub heuristic_factor: f32,
    /// Stop and report no path after this many expansions.
    pub max_expansions: Option<usize>,
    /// Consult the grid's connected components before searching, if it has any.
    pub use_components: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            heuristic: HeuristicKind::Manhattan,
            heuristic_factor: ADMISSIBLE_HEURISTIC_FACTOR,
            max_expansions: None,
            use_components: true,
        }
    }
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_heuristic_factor(mut self, heuristic_factor: f32) -> Self {
        self.heuristic_factor = heuristic_factor;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn without_components(mut self) -> Self {
        self.use_components = false;
        self
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.heuristic_factor.is_finite() && self.heuristic_factor >= 0.0 {
            Ok(())
        } else {
            Err(GridError::InvalidHeuristicFactor(self.heuristic_factor))
        }
    }

    /// Whether the configured heuristic can never overestimate.
    pub fn is_admissible(&self) -> bool {
        self.heuristic_factor <= ADMISSIBLE_HEURISTIC_FACTOR
    }

    pub(crate) fn estimate(&self, from: &Coord, to: &Coord) -> i64 {
        let h = self.heuristic.estimate(from, to);
        if self.heuristic_factor == ADMISSIBLE_HEURISTIC_FACTOR {
            h
        } else {
            // Float to int casts saturate, so large factors cap at i64::MAX.
            (h as f64 * self.heuristic_factor as f64) as i64
        }
    }
}
