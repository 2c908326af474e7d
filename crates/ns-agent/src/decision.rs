//! Per-tick action selection.
//!
//! Rules run in priority order and the first one that fires ends the
//! decision:
//!
//! 1. **Sanctioned reaction**: a sanctioned agent cleans up before anything
//!    else.
//! 2. **Carry**: dispose at a bin, or litter when not compliant and not on a
//!    house or office.
//! 3. **Movement**: follow the path, replanning when it is empty or its next
//!    cell has become blocked.
//! 4. **Peer sanction**: a compliant agent sanctions neighbours it saw
//!    littering last tick.  The move from step 3 is kept.
//!
//! Decisions mutate only the deciding agent.  All effects on the shared world
//! (trash, other agents, positions) are applied later by the step engine from
//! the returned [`Action`].

use ns_core::{AgentRng, GridPos, SanctionMethod};
use ns_spatial::{nearest, plan_direct, plan_via_bin, PlannedRoute, Router};

use crate::{Act, Action, Agent, DecisionContext};

/// Choose this tick's action for `agent`.
///
/// The returned action is also stored in `agent.action`.  Dead agents return
/// [`Action::idle`] without consuming randomness.
pub fn decide<R: Router + ?Sized>(
    agent:  &mut Agent,
    ctx:    &DecisionContext<'_>,
    router: &R,
    rng:    &mut AgentRng,
) -> Action {
    let action = if agent.is_dead { Action::idle() } else { choose(agent, ctx, router, rng) };
    agent.action = action.clone();
    action
}

fn choose<R: Router + ?Sized>(
    agent:  &mut Agent,
    ctx:    &DecisionContext<'_>,
    router: &R,
    rng:    &mut AgentRng,
) -> Action {
    if agent.was_sanctioned {
        if let Some(action) = react_to_sanction(agent, ctx, router, rng) {
            return action;
        }
    }

    let mut action = Action::idle();

    // ── Carry ─────────────────────────────────────────────────────────────
    if agent.is_carrying() {
        if ctx.map.is_bin(agent.current) {
            agent.trash_count = 0;
            agent.used_bin_this_trip = true;
            return Action::with_act(Act::Dispose);
        }
        if !agent.comp && !ctx.map.role(agent.current).forbids_littering() {
            agent.trash_count = 0;
            agent.has_littered_this_trip = true;
            return Action::with_act(Act::Litter);
        }
        // On a house or office: keep carrying and move on.
    }

    // ── Movement ──────────────────────────────────────────────────────────
    let needs_replan = match agent.path.front() {
        Some(&next) => !ctx.map.is_passable(next, ctx.trash),
        None => true,
    };
    if needs_replan {
        let plan = if agent.comp {
            plan_via_bin(router, ctx.map, ctx.trash, agent.current, agent.end, rng)
        } else {
            plan_direct(router, ctx.map, ctx.trash, agent.current, agent.end, rng)
        };
        match plan {
            PlannedRoute::Blocked => {
                agent.path.clear();
                agent.is_dead = true;
                return action;
            }
            plan => {
                agent.path = plan.into_route().unwrap_or_default().into_queue();
            }
        }
    }
    action.move_to = Some(agent.path.pop_front().unwrap_or(agent.current));

    // ── Peer sanction ─────────────────────────────────────────────────────
    let may_sanction = match ctx.method() {
        SanctionMethod::Decentralised => true,
        SanctionMethod::Hybrid => rng.unit() < ctx.config.hybrid_b,
        SanctionMethod::CentralisedEnd | SanctionMethod::CentralisedTs => false,
    };
    if may_sanction && agent.comp {
        let targets = agent.observation.litterers();
        if !targets.is_empty() {
            action.act = Some(Act::Sanction { targets });
        }
    }

    action
}

/// Rule 1.  Returns `None` when there is no trash left anywhere, after
/// clearing the flag so the remaining rules run.
fn react_to_sanction<R: Router + ?Sized>(
    agent:  &mut Agent,
    ctx:    &DecisionContext<'_>,
    router: &R,
    rng:    &mut AgentRng,
) -> Option<Action> {
    if ctx.trash.count(agent.current) > 0 {
        agent.trash_count += 1;
        agent.was_sanctioned = false;
        agent.path = plan_via_bin(router, ctx.map, ctx.trash, agent.current, agent.end, rng)
            .into_route()
            .unwrap_or_default()
            .into_queue();
        return Some(Action::with_act(Act::PickUpTrash));
    }

    let Some(target) = nearest_trash(ctx, agent.current) else {
        agent.was_sanctioned = false;
        return None;
    };

    match router.route(ctx.map, ctx.trash, agent.current, target, rng) {
        Ok(route) => {
            agent.path = route.into_queue();
            let next = agent.path.pop_front();
            Some(Action { act: None, move_to: next })
        }
        Err(_) => {
            agent.path.clear();
            agent.is_dead = true;
            Some(Action::idle())
        }
    }
}

/// Dirty cell nearest to `from` by Manhattan distance.  Candidates are
/// sorted first so ties resolve to the smallest position regardless of hash
/// order.
fn nearest_trash(ctx: &DecisionContext<'_>, from: GridPos) -> Option<GridPos> {
    let mut dirty: Vec<GridPos> = ctx.trash.dirty_cells().collect();
    dirty.sort_unstable();
    nearest(dirty, from)
}
