//! Routing trait and default jittered A* implementation.
//!
//! # Pluggability
//!
//! Agents plan through the [`Router`] trait, so experiments can swap in a
//! deterministic or cost-weighted search without touching the decision
//! engine.  The default [`AStarRouter`] matches the model's movement rules.
//!
//! # Cost model
//!
//! Every orthogonal step costs 1.  Cells that fail
//! [`GridMap::is_passable`] never enter the frontier, so a goal cell that is
//! itself impassable is unreachable.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use ns_core::{AgentRng, GridPos};

use crate::{GridMap, SpatialError, SpatialResult, TrashField};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the cells to step through, in order.
///
/// The start cell is excluded and the goal cell is included, so
/// `cells.len()` equals the number of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<GridPos>,
}

impl Route {
    /// Number of single-cell moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the source and destination are the same cell.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.cells.is_empty()
    }

    /// Final cell, or `None` for a trivial route.
    pub fn destination(&self) -> Option<GridPos> {
        self.cells.last().copied()
    }

    /// Append `next`, which must start where `self` ends.
    pub fn extend(&mut self, next: Route) {
        self.cells.extend(next.cells);
    }

    /// Convert into a queue consumed from the front.
    pub fn into_queue(self) -> VecDeque<GridPos> {
        self.cells.into()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path search over the grid.
///
/// Implementations receive the calling agent's RNG so any randomised tie
/// breaking stays on that agent's deterministic stream.
pub trait Router {
    /// Compute a route from `from` to `to` over the current terrain.
    ///
    /// Returns [`SpatialError::NoRoute`] if the goal cannot be reached.
    /// `from == to` is an empty route, not an error.
    fn route(
        &self,
        map:   &GridMap,
        trash: &TrashField,
        from:  GridPos,
        to:    GridPos,
        rng:   &mut AgentRng,
    ) -> SpatialResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// Best-first search with a Manhattan heuristic and a small random priority
/// perturbation.
///
/// The perturbation is drawn uniformly from `[0, jitter)` for every frontier
/// push.  With `jitter < 1` it only reorders entries whose integer priorities
/// are equal, so routes stay shortest while agents sharing a map spread over
/// equally short alternatives.  Set `jitter` to 0 for a fully deterministic
/// search.
#[derive(Clone, Copy, Debug)]
pub struct AStarRouter {
    pub jitter: f64,
}

impl AStarRouter {
    pub const DEFAULT_JITTER: f64 = 0.1;

    pub fn new(jitter: f64) -> Self {
        Self { jitter }
    }

    /// No tie-break perturbation.
    pub fn deterministic() -> Self {
        Self { jitter: 0.0 }
    }
}

impl Default for AStarRouter {
    fn default() -> Self {
        Self { jitter: Self::DEFAULT_JITTER }
    }
}

impl Router for AStarRouter {
    fn route(
        &self,
        map:   &GridMap,
        trash: &TrashField,
        from:  GridPos,
        to:    GridPos,
        rng:   &mut AgentRng,
    ) -> SpatialResult<Route> {
        astar(map, trash, from, to, self.jitter, rng)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Frontier entry ordered so `BinaryHeap` (a max-heap) pops the lowest
/// priority first.
struct Entry {
    priority: f64,
    cell:     usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

const UNREACHED: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

fn astar(
    map:    &GridMap,
    trash:  &TrashField,
    from:   GridPos,
    to:     GridPos,
    jitter: f64,
    rng:    &mut AgentRng,
) -> SpatialResult<Route> {
    if from == to {
        return Ok(Route::default());
    }
    if !map.in_bounds(from) || !map.in_bounds(to) {
        return Err(SpatialError::NoRoute { from, to });
    }

    let n = map.cell_count();
    // cost[c] = best known step count to reach c.
    let mut cost     = vec![UNREACHED; n];
    let mut parent   = vec![NO_PARENT; n];
    let mut expanded = vec![false; n];

    let start = map.cell_index(from);
    let goal  = map.cell_index(to);
    cost[start] = 0;

    let mut frontier = BinaryHeap::new();
    frontier.push(Entry { priority: 0.0, cell: start });

    while let Some(Entry { cell, .. }) = frontier.pop() {
        if cell == goal {
            return Ok(reconstruct(map, &parent, start, goal));
        }
        if std::mem::replace(&mut expanded[cell], true) {
            continue;
        }

        let pos = map.cell_pos(cell);
        for next in map.neighbors(pos) {
            if !map.is_passable(next, trash) {
                continue;
            }
            let idx = map.cell_index(next);
            let new_cost = cost[cell] + 1;
            if new_cost < cost[idx] {
                cost[idx] = new_cost;
                parent[idx] = cell;
                let noise = if jitter > 0.0 { rng.gen_range(0.0..jitter) } else { 0.0 };
                let priority = new_cost as f64 + next.manhattan(to) as f64 + noise;
                frontier.push(Entry { priority, cell: idx });
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(map: &GridMap, parent: &[usize], start: usize, goal: usize) -> Route {
    let mut cells = Vec::new();
    let mut cur = goal;
    while cur != start {
        cells.push(map.cell_pos(cur));
        cur = parent[cur];
    }
    cells.reverse();
    Route { cells }
}
