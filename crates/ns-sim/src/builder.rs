//! Fluent builder for constructing a [`World`].

use ns_agent::{Agent, AgentModel, NormModel};
use ns_core::{AgentId, AgentRng, GridPos, SimConfig, SimRng, Tick};
use ns_spatial::{AStarRouter, GridMap, MapLayout, TrashField};

use crate::{ActionLog, LitterRegister, SimError, SimResult, World};

/// Fluent builder for [`World<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: ticks, seed, method, `b`, `t`, radius
/// - [`MapLayout`]: grid size and role positions
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                              |
/// |----------------------------|--------------------------------------|
/// | `.agents(n, p)`            | no agents                            |
/// | `.initial_compliance(v)`   | one agent per entry of `v`           |
/// | `.router(r)`               | `AStarRouter::default()`             |
/// | `.model(m)`                | `NormModel<AStarRouter>`             |
///
/// # Placement
///
/// Agent *i* starts on `houses[i % houses.len()]` and draws its first
/// destination from the world RNG, uniformly over offices, parks, and houses
/// other than its start.
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, layout)
///     .agents(10, 0.5)
///     .build()?;
/// world.run(&mut NoopObserver);
/// ```
pub struct WorldBuilder<M: AgentModel = NormModel> {
    config:     SimConfig,
    layout:     MapLayout,
    compliance: Vec<f64>,
    model:      M,
}

impl WorldBuilder<NormModel> {
    pub fn new(config: SimConfig, layout: MapLayout) -> Self {
        Self {
            config,
            layout,
            compliance: Vec::new(),
            model:      NormModel::default(),
        }
    }

    /// Route with `router` instead of the default jittered A*.
    pub fn router(self, router: AStarRouter) -> Self {
        self.model(NormModel::new(router))
    }
}

impl<M: AgentModel> WorldBuilder<M> {
    /// `n` agents, all starting with compliance probability `p`.
    pub fn agents(mut self, n: usize, p: f64) -> Self {
        self.compliance = vec![p; n];
        self
    }

    /// One agent per entry, starting with that compliance probability.
    pub fn initial_compliance(mut self, probs: Vec<f64>) -> Self {
        self.compliance = probs;
        self
    }

    /// Swap in a different agent model.
    pub fn model<M2: AgentModel>(self, model: M2) -> WorldBuilder<M2> {
        WorldBuilder {
            config:     self.config,
            layout:     self.layout,
            compliance: self.compliance,
            model,
        }
    }

    /// Validate inputs, place agents, and return a ready-to-run [`World`].
    pub fn build(self) -> SimResult<World<M>> {
        self.config.validate()?;
        let map = GridMap::new(self.layout)?;

        let agent_count = self.compliance.len();
        if let Some((agent, &value)) = self
            .compliance
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(SimError::ProbabilityOutOfRange { agent, value });
        }
        if agent_count > 0 && map.houses().is_empty() {
            return Err(SimError::NoHouses(agent_count));
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut agents = Vec::with_capacity(agent_count);
        let mut rngs = Vec::with_capacity(agent_count);
        for (i, &p) in self.compliance.iter().enumerate() {
            let id = AgentId::try_from(i).map_err(|_| SimError::TooManyAgents(agent_count))?;
            let houses = map.houses();
            let start = houses[i % houses.len()];
            let end = first_destination(&map, start, &mut rng);
            agents.push(Agent::new(id, start, end, p));
            rngs.push(AgentRng::new(self.config.seed, id));
        }

        Ok(World {
            config:          self.config,
            map,
            trash:           TrashField::new(),
            agents,
            rngs,
            rng,
            model:           self.model,
            log:             ActionLog::new(),
            litterers:       LitterRegister::new(),
            total_sanctions: 0,
            history:         Vec::new(),
            trips:           Vec::new(),
            tick:            Tick::ZERO,
        })
    }
}

fn first_destination(map: &GridMap, start: GridPos, rng: &mut SimRng) -> GridPos {
    let choices: Vec<GridPos> = map
        .offices()
        .iter()
        .chain(map.parks())
        .chain(map.houses())
        .copied()
        .filter(|&p| p != start)
        .collect();
    rng.choose(&choices).copied().unwrap_or(start)
}
