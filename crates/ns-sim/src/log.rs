//! Append-only per-tick action history.

use ns_agent::Action;
use ns_core::{AgentId, Tick};

/// Every agent's action for every recorded tick.
///
/// Rows are appended once per tick in tick order, each indexed by
/// [`AgentId::index`].  Agents only ever see the row of the previous tick,
/// through [`ActionLog::lagged`].
#[derive(Debug, Default)]
pub struct ActionLog {
    rows: Vec<Vec<Action>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the row for the next tick and return that tick.
    pub fn record(&mut self, row: Vec<Action>) -> Tick {
        let tick = Tick(self.rows.len() as u64);
        self.rows.push(row);
        tick
    }

    /// The row recorded for `tick`.
    pub fn row(&self, tick: Tick) -> Option<&[Action]> {
        self.rows.get(tick.index()).map(Vec::as_slice)
    }

    /// What agents deciding during `now` may see: the row of `now - 1`.
    /// `None` on the first tick.
    pub fn lagged(&self, now: Tick) -> Option<&[Action]> {
        now.previous().and_then(|t| self.row(t))
    }

    /// One agent's action at `tick`.
    pub fn get(&self, tick: Tick, agent: AgentId) -> Option<&Action> {
        self.row(tick).and_then(|row| row.get(agent.index()))
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
