//! Best-first search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! extended with an explicit closed set and an optional expansion budget.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::{SaturatingAdd, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Frontier entry. BinaryHeap is a max-heap, so the ordering is reversed where needed.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    seq: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the largest cost (deepest node), then the
        // earliest insertion.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Result of one search run.
pub(crate) struct SearchOutcome<N, C> {
    /// Nodes from start to goal and the cost of the route, if one was found.
    pub path: Option<(Vec<N>, C)>,
    pub expanded: usize,
    /// The expansion budget ran out before the frontier did.
    pub truncated: bool,
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &(parent, _))| {
            i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + SaturatingAdd + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut seq = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
        seq,
    });
    // Best known cost per node, together with the index of the predecessor achieving it.
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut expanded = 0;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, index);
                debug!(
                    "Goal reached after {} expansions, {} nodes discovered",
                    expanded,
                    parents.len()
                );
                return SearchOutcome {
                    path: Some((path, cost)),
                    expanded,
                    truncated: false,
                };
            }
            // A node may have been pushed several times when a cheaper way to it was found
            // later; only the first pop counts.
            if !closed.insert(index) {
                continue;
            }
            if max_expansions.is_some_and(|limit| expanded >= limit) {
                warn!("Expansion limit of {} reached, giving up", expanded);
                return SearchOutcome {
                    path: None,
                    expanded,
                    truncated: true,
                };
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost.saturating_add(&move_cost);
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }
            seq += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost.saturating_add(&h),
                cost: new_cost,
                index: n,
                seq,
            });
        }
    }
    debug!("Frontier exhausted after {} expansions", expanded);
    SearchOutcome {
        path: None,
        expanded,
        truncated: false,
    }
}
