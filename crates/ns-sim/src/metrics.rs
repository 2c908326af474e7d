//! Per-tick aggregates, trip records, and end-of-run agent reports.

use ns_agent::Agent;
use ns_core::{AgentId, GridPos, Tick, TripId};
use ns_spatial::{GridMap, TrashField};

/// Aggregates recorded once per tick, after the update phase.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMetrics {
    pub tick:             Tick,
    /// Mean `compliant_prob` over the whole roster, dead agents included.
    /// 0 for an empty roster.
    pub mean_compliance:  f64,
    pub clean_cells:      usize,
    /// `clean_cells` as a percentage of all cells.
    pub clean_percentage: f64,
    /// Cumulative sanctions since the start of the run.
    pub total_sanctions:  u64,
    pub dead_agents:      usize,
}

impl TickMetrics {
    pub fn measure(
        tick:            Tick,
        agents:          &[Agent],
        map:             &GridMap,
        trash:           &TrashField,
        total_sanctions: u64,
    ) -> Self {
        let mean_compliance = if agents.is_empty() {
            0.0
        } else {
            agents.iter().map(|a| a.compliant_prob).sum::<f64>() / agents.len() as f64
        };
        let cells = map.cell_count();
        let clean_cells = trash.clean_cells(cells);
        Self {
            tick,
            mean_compliance,
            clean_cells,
            clean_percentage: clean_cells as f64 / cells as f64 * 100.0,
            total_sanctions,
            dead_agents: agents.iter().filter(|a| a.is_dead).count(),
        }
    }
}

/// One completed trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRecord {
    /// Tick during which the agent arrived.
    pub tick:     Tick,
    pub agent:    AgentId,
    pub trip_id:  TripId,
    /// Ticks spent on the trip, as counted by the agent.
    pub duration: u32,
    pub from:     GridPos,
    pub to:       GridPos,
}

/// Final state of one agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReport {
    pub agent:              AgentId,
    pub compliant_prob:     f64,
    pub sanctioned:         u32,
    pub trip_durations:     Vec<u32>,
    pub first_bin_use_tick: Option<Tick>,
    pub is_dead:            bool,
}

impl AgentReport {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            agent:              agent.id,
            compliant_prob:     agent.compliant_prob,
            sanctioned:         agent.sanctioned,
            trip_durations:     agent.trip_durations.clone(),
            first_bin_use_tick: agent.first_bin_use_tick,
            is_dead:            agent.is_dead,
        }
    }

    /// Mean completed-trip duration, `None` before the first trip ends.
    pub fn mean_trip_duration(&self) -> Option<f64> {
        if self.trip_durations.is_empty() {
            return None;
        }
        let sum: u64 = self.trip_durations.iter().map(|&d| d as u64).sum();
        Some(sum as f64 / self.trip_durations.len() as f64)
    }
}
