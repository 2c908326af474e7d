//! Trip-level planning on top of a [`Router`]: direct routes and routes that
//! detour through the nearest bin.

use ns_core::{AgentRng, GridPos};

use crate::{GridMap, Route, Router, TrashField};

/// Outcome of a planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedRoute {
    /// Straight to the destination.
    Direct(Route),
    /// Through `bin`, then on to the destination.
    ViaBin { bin: GridPos, route: Route },
    /// Neither the via-bin nor the direct route exists.
    Blocked,
}

impl PlannedRoute {
    /// The route to follow, or `None` when blocked.
    pub fn into_route(self) -> Option<Route> {
        match self {
            PlannedRoute::Direct(route) | PlannedRoute::ViaBin { route, .. } => Some(route),
            PlannedRoute::Blocked => None,
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, PlannedRoute::Blocked)
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PlannedRoute::Direct(_)      => "direct",
            PlannedRoute::ViaBin { .. }  => "via bin",
            PlannedRoute::Blocked        => "blocked",
        }
    }
}

/// Bin with the smallest Manhattan distance from `from`.  Ties go to the bin
/// listed first in the layout.
///
/// Straight-line distance is used, not path length, so under obstacles this
/// may pick a farther or unreachable bin.
pub fn nearest_bin(map: &GridMap, from: GridPos) -> Option<GridPos> {
    nearest(map.bins().iter().copied(), from)
}

/// Element of `candidates` nearest to `from` by Manhattan distance; first
/// wins on ties.
pub fn nearest(candidates: impl IntoIterator<Item = GridPos>, from: GridPos) -> Option<GridPos> {
    candidates
        .into_iter()
        .fold(None, |best: Option<(u32, GridPos)>, p| {
            let d = p.manhattan(from);
            match best {
                Some((bd, _)) if bd <= d => best,
                _ => Some((d, p)),
            }
        })
        .map(|(_, p)| p)
}

/// Route straight from `from` to `to`.
pub fn plan_direct<R: Router + ?Sized>(
    router: &R,
    map:    &GridMap,
    trash:  &TrashField,
    from:   GridPos,
    to:     GridPos,
    rng:    &mut AgentRng,
) -> PlannedRoute {
    match router.route(map, trash, from, to, rng) {
        Ok(route) => PlannedRoute::Direct(route),
        Err(_) => PlannedRoute::Blocked,
    }
}

/// Route from `from` to the nearest bin, then from that bin to `to`.
///
/// Falls back to [`plan_direct`] when there are no bins or the bin cannot be
/// reached.  If the bin is reachable but the destination is not reachable
/// from it, the plan is [`PlannedRoute::Blocked`].
pub fn plan_via_bin<R: Router + ?Sized>(
    router: &R,
    map:    &GridMap,
    trash:  &TrashField,
    from:   GridPos,
    to:     GridPos,
    rng:    &mut AgentRng,
) -> PlannedRoute {
    let Some(bin) = nearest_bin(map, from) else {
        return plan_direct(router, map, trash, from, to, rng);
    };

    let Ok(mut route) = router.route(map, trash, from, bin, rng) else {
        return plan_direct(router, map, trash, from, to, rng);
    };

    match router.route(map, trash, bin, to, rng) {
        Ok(onward) => {
            route.extend(onward);
            PlannedRoute::ViaBin { bin, route }
        }
        Err(_) => PlannedRoute::Blocked,
    }
}
