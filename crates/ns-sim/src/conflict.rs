//! Move conflict resolution.
//!
//! Two passes: every agent's proposed cell is collected first, then final
//! positions are decided from the complete set of proposals.  No agent's
//! position changes until all proposals are known.

use rustc_hash::FxHashMap;

use ns_agent::{Action, Agent};
use ns_core::GridPos;
use ns_spatial::{GridMap, TrashField};

/// The cell `agent` asks to occupy after this tick.
///
/// Agents without a move intent, or whose target has become impassable,
/// propose their current cell.
pub fn proposal(agent: &Agent, action: &Action, map: &GridMap, trash: &TrashField) -> GridPos {
    match action.move_to {
        Some(target) if map.is_passable(target, trash) => target,
        _ => agent.current,
    }
}

/// Final position of every agent, in roster order.
///
/// Any cell proposed by more than one agent is contested, and every agent
/// that proposed it stays where it is.  An agent staying put counts as
/// proposing its own cell, so moving onto an occupied cell that its occupant
/// is not leaving fails too.  There is no priority and no partial admission.
pub fn resolve_moves(
    agents:  &[Agent],
    actions: &[Action],
    map:     &GridMap,
    trash:   &TrashField,
) -> Vec<GridPos> {
    let proposals: Vec<GridPos> = agents
        .iter()
        .zip(actions)
        .map(|(agent, action)| proposal(agent, action, map, trash))
        .collect();

    let mut demand: FxHashMap<GridPos, u32> = FxHashMap::default();
    for &cell in &proposals {
        *demand.entry(cell).or_insert(0) += 1;
    }

    agents
        .iter()
        .zip(proposals)
        .map(|(agent, cell)| if demand[&cell] > 1 { agent.current } else { cell })
        .collect()
}
