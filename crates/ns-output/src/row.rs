//! Plain data row types written by output backends.

use ns_agent::Agent;
use ns_core::Tick;
use ns_sim::{AgentReport, TickMetrics, TripRecord};

/// World aggregates for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMetricsRow {
    pub tick:             u64,
    pub mean_compliance:  f64,
    pub clean_cells:      u64,
    pub clean_percentage: f64,
    pub total_sanctions:  u64,
    pub dead_agents:      u64,
}

impl From<&TickMetrics> for TickMetricsRow {
    fn from(m: &TickMetrics) -> Self {
        Self {
            tick:             m.tick.0,
            mean_compliance:  m.mean_compliance,
            clean_cells:      m.clean_cells as u64,
            clean_percentage: m.clean_percentage,
            total_sanctions:  m.total_sanctions,
            dead_agents:      m.dead_agents as u64,
        }
    }
}

/// One agent's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:       u32,
    pub tick:           u64,
    pub x:              u32,
    pub y:              u32,
    pub compliant_prob: f64,
    pub sanctioned:     u32,
    pub trip_id:        u32,
    pub trash_count:    u32,
    pub is_dead:        bool,
}

impl AgentSnapshotRow {
    pub fn capture(tick: Tick, agent: &Agent) -> Self {
        Self {
            agent_id:       agent.id.0,
            tick:           tick.0,
            x:              agent.current.x,
            y:              agent.current.y,
            compliant_prob: agent.compliant_prob,
            sanctioned:     agent.sanctioned,
            trip_id:        agent.trip_id.0,
            trash_count:    agent.trash_count,
            is_dead:        agent.is_dead,
        }
    }
}

/// One completed trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub trip_id:  u32,
    pub duration: u32,
    pub from_x:   u32,
    pub from_y:   u32,
    pub to_x:     u32,
    pub to_y:     u32,
}

impl From<&TripRecord> for TripRow {
    fn from(t: &TripRecord) -> Self {
        Self {
            tick:     t.tick.0,
            agent_id: t.agent.0,
            trip_id:  t.trip_id.0,
            duration: t.duration,
            from_x:   t.from.x,
            from_y:   t.from.y,
            to_x:     t.to.x,
            to_y:     t.to.y,
        }
    }
}

/// Final state of one agent.
///
/// `mean_trip_duration` and `first_bin_use_tick` are `None` when the agent
/// never completed a trip or never littered into a bin; the CSV backend
/// writes those as empty fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummaryRow {
    pub agent_id:           u32,
    pub compliant_prob:     f64,
    pub sanctioned:         u32,
    pub trips_completed:    u32,
    pub mean_trip_duration: Option<f64>,
    pub first_bin_use_tick: Option<u64>,
    pub is_dead:            bool,
}

impl From<&AgentReport> for AgentSummaryRow {
    fn from(r: &AgentReport) -> Self {
        Self {
            agent_id:           r.agent.0,
            compliant_prob:     r.compliant_prob,
            sanctioned:         r.sanctioned,
            trips_completed:    r.trip_durations.len() as u32,
            mean_trip_duration: r.mean_trip_duration(),
            first_bin_use_tick: r.first_bin_use_tick.map(|t| t.0),
            is_dead:            r.is_dead,
        }
    }
}
