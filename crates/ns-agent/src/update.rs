//! End-of-tick internal state update: trip start, trip rollover,
//! compliance recompute, and passive sanction accrual.
//!
//! A trip starts on the first update after it was assigned (the agent's
//! first tick, or the tick after the previous trip ended), wherever the
//! agent stands by then.

use ns_core::{AgentRng, GridPos, SanctionMethod, TripId};

use crate::{Agent, DecisionContext};

/// Steepness of the compliance curve.
pub const COMPLIANCE_K: f64 = 0.5;
/// Midpoint of the compliance curve.
pub const COMPLIANCE_X0: f64 = 0.0;

/// Logistic curve `1 / (1 + e^(-k (x - x0)))`.
#[inline]
pub fn sigmoid(x: f64, k: f64, x0: f64) -> f64 {
    1.0 / (1.0 + (-k * (x - x0)).exp())
}

/// Compliance probability after `sanctioned` cumulative sanctions.
#[inline]
pub fn compliance_for(sanctioned: u32) -> f64 {
    sigmoid(sanctioned as f64, COMPLIANCE_K, COMPLIANCE_X0)
}

/// A trip that ended during this update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTrip {
    pub trip_id:  TripId,
    pub duration: u32,
    pub from:     GridPos,
    pub to:       GridPos,
}

/// What the world needs to know about one agent's update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub trip:              Option<CompletedTrip>,
    /// Hybrid trip-end sanction applied by the agent itself.  Counts toward
    /// the world total.
    pub trip_end_sanction: bool,
    /// Peer sanctions received last tick.  Already counted in the world
    /// total when they were issued.
    pub peer_sanctions:    u32,
}

/// Run the internal-state update for one agent.  Dead agents are left
/// untouched.
pub fn update_agent(
    agent: &mut Agent,
    ctx:   &DecisionContext<'_>,
    rng:   &mut AgentRng,
) -> UpdateOutcome {
    let mut outcome = UpdateOutcome::default();
    if agent.is_dead {
        return outcome;
    }

    if !agent.trip_started {
        begin_trip(agent, rng);
    }

    if agent.at_end() {
        if ctx.method() == SanctionMethod::Hybrid && agent.has_littered_this_trip {
            agent.sanctioned += 1;
            outcome.trip_end_sanction = true;
        }
        agent.compliant_prob = compliance_for(agent.sanctioned);

        outcome.trip = Some(CompletedTrip {
            trip_id:  agent.trip_id,
            duration: agent.steps_since_start,
            from:     agent.start,
            to:       agent.end,
        });
        agent.trip_durations.push(agent.steps_since_start);
        agent.steps_since_start = 0;
        agent.used_bin_this_trip = false;
        agent.has_littered_this_trip = false;
        agent.trip_started = false;

        agent.start = agent.current;
        agent.end = next_destination(agent, ctx, rng);
        agent.trip_id = agent.trip_id.next();
        agent.path.clear();
    } else {
        agent.steps_since_start += 1;
    }

    if ctx.method().allows_peer_sanctions() {
        let received = agent.observation.sanctions_against(agent.id);
        agent.sanctioned += received;
        outcome.peer_sanctions = received;
    }

    outcome
}

/// Start-of-trip bookkeeping: draw this trip's compliance, pick up one unit
/// of trash, and reset the step counter and litter flag.
pub fn begin_trip(agent: &mut Agent, rng: &mut AgentRng) {
    agent.comp = rng.unit() < agent.compliant_prob;
    agent.trash_count += 1;
    agent.steps_since_start = 0;
    agent.has_littered_this_trip = false;
    agent.trip_started = true;
}

/// Uniform draw over houses, offices, and parks other than the current cell.
/// Falls back to the current cell when there is nowhere else to go.
fn next_destination(agent: &Agent, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> GridPos {
    let choices: Vec<GridPos> = ctx
        .map
        .destinations()
        .filter(|&p| p != agent.current)
        .collect();
    rng.choose(&choices).copied().unwrap_or(agent.current)
}
