//! What an agent chooses to do in one tick.

use ns_core::{AgentId, GridPos};

/// The single non-movement act an agent may perform in a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Act {
    /// Drop carried trash on the current cell.
    Litter,
    /// Put carried trash into the bin the agent stands on.
    Dispose,
    /// Take one unit of trash from the current cell.
    PickUpTrash,
    /// Flag every listed agent as sanctioned.
    Sanction { targets: Vec<AgentId> },
}

impl Act {
    pub fn as_str(&self) -> &'static str {
        match self {
            Act::Litter          => "litter",
            Act::Dispose         => "dispose",
            Act::PickUpTrash     => "pick_up_trash",
            Act::Sanction { .. } => "sanction",
        }
    }
}

/// One agent's choice for one tick: at most one [`Act`] plus a move intent.
///
/// `move_to == None` means the agent did not get as far as choosing a move
/// (its act ended the tick, or it died); the engine treats it as staying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub act:     Option<Act>,
    pub move_to: Option<GridPos>,
}

impl Action {
    /// No act, no move.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_act(act: Act) -> Self {
        Self { act: Some(act), move_to: None }
    }

    #[inline]
    pub fn is_litter(&self) -> bool {
        matches!(self.act, Some(Act::Litter))
    }

    /// `true` if this is a sanction naming `agent`.
    pub fn sanctions(&self, agent: AgentId) -> bool {
        match &self.act {
            Some(Act::Sanction { targets }) => targets.contains(&agent),
            _ => false,
        }
    }

    /// Sanction targets, empty unless this is a sanction.
    pub fn targets(&self) -> &[AgentId] {
        match &self.act {
            Some(Act::Sanction { targets }) => targets,
            _ => &[],
        }
    }

    /// Label of the act, `"none"` when there is none.
    pub fn kind(&self) -> &'static str {
        self.act.as_ref().map_or("none", Act::as_str)
    }
}
