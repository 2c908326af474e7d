//! Central sanctioning regimes.
//!
//! Peer sanctions are chosen by agents themselves (see `ns_agent::decide`)
//! and applied as action effects.  This module covers the two sanctions the
//! world applies on its own:
//!
//! | Regime            | Who is sanctioned                                  | When                    |
//! |-------------------|----------------------------------------------------|-------------------------|
//! | `Centralised-ts`  | everyone registered as littering since last check  | every `t` ticks         |
//! | `Centralised-end` | agents at their trip end that littered this trip   | every tick              |
//! | `Hybrid`          | same as `Centralised-end`                          | with probability `1 - b` |

use std::collections::BTreeSet;

use ns_agent::Agent;
use ns_core::{AgentId, Tick};

/// Litterers awaiting the next periodic check.
///
/// Kept ordered so sanctions are applied and logged in roster order.
#[derive(Debug, Default, Clone)]
pub struct LitterRegister {
    pending: BTreeSet<AgentId>,
}

impl LitterRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, agent: AgentId) {
        self.pending.insert(agent);
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.pending.contains(&agent)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// `true` if `now` closes a `t`-tick interval.  With ticks counted from 0,
/// the checks land on ticks `t - 1`, `2t - 1`, and so on.
#[inline]
pub fn is_periodic_check(now: Tick, interval: u64) -> bool {
    interval > 0 && (now.0 + 1).is_multiple_of(interval)
}

/// Sanction every registered litterer once, reset their trip-litter flag,
/// and empty the register.  Returns the sanctioned agents.
pub fn sanction_registered(agents: &mut [Agent], register: &mut LitterRegister) -> Vec<AgentId> {
    let sanctioned: Vec<AgentId> = std::mem::take(&mut register.pending).into_iter().collect();
    for &id in &sanctioned {
        if let Some(agent) = agents.get_mut(id.index()) {
            agent.sanctioned += 1;
            agent.has_littered_this_trip = false;
        }
    }
    sanctioned
}

/// Sanction every agent standing on its trip end that littered during the
/// trip, and reset its trip-litter flag.  Returns the sanctioned agents.
pub fn sanction_at_trip_end(agents: &mut [Agent]) -> Vec<AgentId> {
    let mut sanctioned = Vec::new();
    for agent in agents.iter_mut() {
        if agent.has_littered_this_trip && agent.at_end() {
            agent.sanctioned += 1;
            agent.has_littered_this_trip = false;
            sanctioned.push(agent.id);
        }
    }
    sanctioned
}
