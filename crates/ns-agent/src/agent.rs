//! Per-agent state.

use std::collections::VecDeque;

use ns_core::{AgentId, GridPos, Tick, TripId};

use crate::{Action, Observation};

/// Everything the engine tracks about one agent.
///
/// Agents are owned by the world in a `Vec<Agent>` indexed by
/// [`AgentId::index`]; the matching [`AgentRng`][ns_core::AgentRng] lives in
/// a parallel vector so decisions can borrow both mutably at once.
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,

    // ── Position and route ───────────────────────────────────────────────
    pub current:  GridPos,
    pub start:    GridPos,
    pub end:      GridPos,
    /// Remaining planned cells, consumed from the front.
    pub path:     VecDeque<GridPos>,

    // ── Compliance ───────────────────────────────────────────────────────
    /// Whether the agent follows the disposal norm on the current trip.
    pub comp:           bool,
    pub compliant_prob: f64,

    // ── Trip bookkeeping ─────────────────────────────────────────────────
    pub trash_count:            u32,
    pub trip_id:                TripId,
    pub steps_since_start:      u32,
    /// Set once the current trip's compliance draw and trash pickup ran.
    pub trip_started:           bool,
    pub has_littered_this_trip: bool,
    pub used_bin_this_trip:     bool,
    pub first_bin_use_tick:     Option<Tick>,
    pub trip_durations:         Vec<u32>,

    // ── Sanctions ────────────────────────────────────────────────────────
    /// Cumulative sanctions received.
    pub sanctioned:     u32,
    /// Set by a peer sanction, consumed by the next decision.
    pub was_sanctioned: bool,
    /// Terminal: the agent could not find a route and no longer acts.
    pub is_dead:        bool,

    // ── Per-tick scratch ─────────────────────────────────────────────────
    pub observation: Observation,
    pub action:      Action,
}

impl Agent {
    /// A fresh agent at `start`, heading for `end`, carrying one unit of
    /// trash and not yet compliant.
    pub fn new(id: AgentId, start: GridPos, end: GridPos, compliant_prob: f64) -> Self {
        Self {
            id,
            current: start,
            start,
            end,
            path: VecDeque::new(),
            comp: false,
            compliant_prob,
            trash_count: 1,
            trip_id: TripId::default(),
            steps_since_start: 0,
            trip_started: false,
            has_littered_this_trip: false,
            used_bin_this_trip: false,
            first_bin_use_tick: None,
            trip_durations: Vec::new(),
            sanctioned: 0,
            was_sanctioned: false,
            is_dead: false,
            observation: Observation::default(),
            action: Action::default(),
        }
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.current == self.end
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.trash_count > 0
    }

    /// Completed trips so far.
    pub fn trips_completed(&self) -> usize {
        self.trip_durations.len()
    }
}
