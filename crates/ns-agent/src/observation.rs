//! What an agent perceives at the start of a tick.
//!
//! Agents see other agents within a Manhattan radius, those agents' actions
//! from the previous tick, and whether each of them was sanctioned.  The trash
//! field is not copied: nothing mutates it between the observe and decide
//! phases, so decisions read it through the
//! [`DecisionContext`][crate::DecisionContext] directly.

use ns_core::{AgentId, GridPos};

use crate::{Action, Agent};

/// One nearby agent as seen by the observer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour {
    pub id:             AgentId,
    pub position:       GridPos,
    pub was_sanctioned: bool,
    /// The neighbour's action last tick, `None` on the first tick.
    pub previous:       Option<Action>,
}

/// Snapshot of an agent's surroundings, rebuilt every tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    /// Agents within the radius, excluding the observer, in roster order.
    pub neighbours: Vec<Neighbour>,
}

impl Observation {
    /// Build the observation for `observer`.
    ///
    /// `previous` is the action log row of the previous tick indexed by
    /// agent, or `None` before any tick has been recorded.  Dead agents are
    /// still visible.
    pub fn gather(
        observer: &Agent,
        roster:   &[Agent],
        previous: Option<&[Action]>,
        radius:   u32,
    ) -> Self {
        let neighbours = roster
            .iter()
            .filter(|other| other.id != observer.id)
            .filter(|other| other.current.within(observer.current, radius))
            .map(|other| Neighbour {
                id:             other.id,
                position:       other.current,
                was_sanctioned: other.was_sanctioned,
                previous:       previous.and_then(|row| row.get(other.id.index()).cloned()),
            })
            .collect();
        Self { neighbours }
    }

    /// Neighbours whose previous action was littering, in roster order.
    pub fn litterers(&self) -> Vec<AgentId> {
        self.neighbours
            .iter()
            .filter(|n| n.previous.as_ref().is_some_and(Action::is_litter))
            .map(|n| n.id)
            .collect()
    }

    /// Number of previous-tick sanctions by neighbours that name `agent`.
    pub fn sanctions_against(&self, agent: AgentId) -> u32 {
        self.neighbours
            .iter()
            .filter(|n| n.previous.as_ref().is_some_and(|a| a.sanctions(agent)))
            .count() as u32
    }
}
