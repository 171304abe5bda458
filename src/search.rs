//! Cost-ordered search over an implicit state space.
//!
//! Unlike a plain Dijkstra that stops at the first goal, [`find_minimum_cost`]
//! keeps every predecessor that reaches a state at its best cost, so the whole
//! family of optimal paths can be walked back afterwards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

pub type Cost = u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no goal state is reachable from the start state")]
    Unreachable,
    #[error("state {state} lies on an optimal path but has no recorded predecessor")]
    CorruptPathGraph { state: String },
}

/// Min-heap entry; equal costs pop in insertion order.
struct Entry<S> {
    cost: Cost,
    seq: usize,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The result of a finished search: the optimal cost, the goals that attain
/// it, and everything needed to walk the optimal paths back to the start.
#[derive(Debug, Clone)]
pub struct Search<S> {
    start: S,
    min_cost: Cost,
    goals: Vec<S>,
    best: FxHashMap<S, Cost>,
    predecessors: FxHashMap<S, Vec<S>>,
}

/// Runs a cost-ordered search from `start` until every goal reachable at the
/// minimum cost has been found.
///
/// `transitions` yields `(next_state, step_cost)` pairs and must never return
/// a negative cost (the type makes that impossible). Goal states are recorded
/// but not expanded. Once a goal is reached at cost `C`, frontier entries
/// costing more than `C` are discarded; entries costing exactly `C` are still
/// processed so ties between goals survive.
pub fn find_minimum_cost<S, I>(
    start: S,
    mut transitions: impl FnMut(&S) -> I,
    mut is_goal: impl FnMut(&S) -> bool,
) -> Result<Search<S>, SearchError>
where
    S: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = (S, Cost)>,
{
    let mut best: FxHashMap<S, Cost> = FxHashMap::default();
    let mut predecessors: FxHashMap<S, Vec<S>> = FxHashMap::default();
    let mut frontier = BinaryHeap::new();
    let mut goals = Vec::new();
    let mut goal_cost: Option<Cost> = None;
    let mut seq = 0;
    let mut expanded = 0usize;

    best.insert(start.clone(), 0);
    frontier.push(Entry { cost: 0, seq, state: start.clone() });

    while let Some(Entry { cost, state, .. }) = frontier.pop() {
        if goal_cost.is_some_and(|goal_cost| cost > goal_cost) {
            break;
        }
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        if is_goal(&state) {
            log::trace!("goal {state:?} reached at cost {cost}");
            goal_cost = Some(cost);
            goals.push(state);
            continue;
        }

        expanded += 1;
        for (next, step) in transitions(&state) {
            let next_cost = cost + step;
            if goal_cost.is_some_and(|goal_cost| next_cost > goal_cost) {
                continue;
            }
            match best.get(&next) {
                Some(&known) if next_cost > known => {}
                Some(&known) if next_cost == known => {
                    let preds = predecessors.entry(next).or_default();
                    if !preds.contains(&state) {
                        preds.push(state.clone());
                    }
                }
                _ => {
                    best.insert(next.clone(), next_cost);
                    predecessors.insert(next.clone(), vec![state.clone()]);
                    seq += 1;
                    frontier.push(Entry { cost: next_cost, seq, state: next });
                }
            }
        }
    }

    let Some(min_cost) = goal_cost else {
        log::debug!("search from {start:?}: no goal among {} discovered states", best.len());
        return Err(SearchError::Unreachable);
    };
    log::debug!(
        "search from {start:?}: min cost {min_cost}, {} goal(s), {expanded} expanded, {} discovered",
        goals.len(),
        best.len()
    );
    Ok(Search { start, min_cost, goals, best, predecessors })
}

/// Walks every recorded predecessor backwards from `goals` and returns all
/// states that lie on at least one optimal path, start and goals included.
pub fn reconstruct_all_states_on_optimal_paths<S>(
    start: &S,
    goals: &[S],
    predecessors: &FxHashMap<S, Vec<S>>,
) -> Result<FxHashSet<S>, SearchError>
where
    S: Clone + Eq + Hash + Debug,
{
    let mut on_path: FxHashSet<S> = goals.iter().cloned().collect();
    let mut pending = goals.to_vec();
    while let Some(state) = pending.pop() {
        if state == *start {
            continue;
        }
        let preds = predecessors
            .get(&state)
            .filter(|preds| !preds.is_empty())
            .ok_or_else(|| SearchError::CorruptPathGraph { state: format!("{state:?}") })?;
        for pred in preds {
            if on_path.insert(pred.clone()) {
                pending.push(pred.clone());
            }
        }
    }
    Ok(on_path)
}

impl<S> Search<S>
where
    S: Clone + Eq + Hash + Debug,
{
    pub fn min_cost(&self) -> Cost {
        self.min_cost
    }

    /// Goals reached at [`Search::min_cost`], in the order they were popped.
    pub fn goals(&self) -> &[S] {
        &self.goals
    }

    /// Best cost recorded for `state`. Values up to the minimum goal cost are
    /// final; anything above it was still tentative when the search stopped.
    pub fn best_cost(&self, state: &S) -> Option<Cost> {
        self.best.get(state).copied()
    }

    pub fn predecessors(&self, state: &S) -> &[S] {
        self.predecessors.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn predecessor_map(&self) -> &FxHashMap<S, Vec<S>> {
        &self.predecessors
    }

    pub fn states_on_optimal_paths(&self) -> Result<FxHashSet<S>, SearchError> {
        reconstruct_all_states_on_optimal_paths(&self.start, &self.goals, &self.predecessors)
    }

    /// Number of distinct optimal paths from the start to any optimal goal.
    ///
    /// Assumes strictly positive step costs, so every predecessor is settled
    /// at a lower cost than its successor.
    pub fn count_optimal_paths(&self) -> Result<u64, SearchError> {
        let on_path = self.states_on_optimal_paths()?;
        let by_cost = on_path
            .iter()
            .sorted_by_key(|&state| self.best.get(state).copied().unwrap_or_default())
            .collect_vec();

        let mut paths: FxHashMap<&S, u64> = FxHashMap::default();
        for state in by_cost {
            let count = if *state == self.start {
                1
            } else {
                self.predecessors(state).iter().filter_map(|pred| paths.get(pred)).sum::<u64>()
            };
            paths.insert(state, count);
        }
        Ok(self.goals.iter().filter_map(|goal| paths.get(goal)).sum())
    }
}
