//! The `AgentModel` trait: the step engine's hook into agent behaviour.

use ns_core::AgentRng;
use ns_spatial::{AStarRouter, Router};

use crate::{decide, update_agent, Action, Agent, DecisionContext, UpdateOutcome};

/// Pluggable agent behaviour.
///
/// The step engine calls [`decide`][Self::decide] for every agent in the
/// decide phase and [`update`][Self::update] for every agent after effects
/// are applied.  Both receive the agent's own [`AgentRng`] so runs are
/// reproducible for a fixed seed.
pub trait AgentModel {
    fn decide(
        &self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Action;

    fn update(
        &self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> UpdateOutcome;
}

/// The waste-disposal norm model, routing through `R`.
#[derive(Clone, Debug, Default)]
pub struct NormModel<R = AStarRouter> {
    pub router: R,
}

impl<R: Router> NormModel<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: Router> AgentModel for NormModel<R> {
    fn decide(
        &self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Action {
        decide(agent, ctx, &self.router, rng)
    }

    fn update(
        &self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> UpdateOutcome {
        update_agent(agent, ctx, rng)
    }
}
