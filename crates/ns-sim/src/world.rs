//! The `World` struct and its tick loop.

use tracing::{debug, info, trace, warn};

use ns_agent::{Act, Action, Agent, AgentModel, DecisionContext, NormModel, Observation};
use ns_core::{AgentRng, SanctionMethod, SimConfig, SimRng, Tick};
use ns_spatial::{GridMap, TrashField};

use crate::conflict::resolve_moves;
use crate::sanction::{is_periodic_check, sanction_at_trip_end, sanction_registered};
use crate::{ActionLog, AgentReport, LitterRegister, SimObserver, TickMetrics, TripRecord};

/// The whole simulation: map, trash, roster, and history.
///
/// `World<M>` drives the tick loop.  Each tick runs these phases in order:
///
/// 1. **Observe**: every agent's observation is built from the roster and
///    the previous tick's action row before anyone decides.
/// 2. **Decide**: [`AgentModel::decide`] for each live agent, in roster
///    order.  Agents only see last tick's actions.
/// 3. **Record**: the action row is appended to the [`ActionLog`].
/// 4. **Move**: all `was_sanctioned` flags are cleared, then moves are
///    resolved against each other and committed together.  An agent whose
///    move is rejected keeps that cell at the front of its path.
/// 5. **Central sanctions**: the periodic check under `Centralised-ts`, then
///    trip-end sanctions under `Centralised-end` (or `Hybrid` when the world
///    draw is at least `b`).
/// 6. **Effects**: litter, pick-up, and peer sanctions are applied.
/// 7. **Update**: [`AgentModel::update`] for each live agent.
/// 8. **Measure**: a [`TickMetrics`] row is appended to the history.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<M: AgentModel = NormModel> {
    pub config: SimConfig,
    pub map:    GridMap,
    pub trash:  TrashField,

    /// The roster, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Per-agent RNGs, parallel to `agents` for the split-borrow pattern.
    pub rngs: Vec<AgentRng>,

    /// World-level RNG for the Hybrid trip-end draw.
    pub rng: SimRng,

    pub model: M,

    pub log:       ActionLog,
    /// Litterers pending the next `Centralised-ts` check.
    pub litterers: LitterRegister,

    pub total_sanctions: u64,
    pub history:         Vec<TickMetrics>,
    pub trips:           Vec<TripRecord>,

    pub(crate) tick: Tick,
}

impl<M: AgentModel> World<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The next tick to be processed.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// `true` once `config.total_ticks` ticks have run.
    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.end_tick()
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            agents = self.agents.len(),
            method = %self.config.method,
            ticks  = self.config.total_ticks,
            seed   = self.config.seed,
            "simulation start"
        );
        while !self.is_finished() {
            self.tick_with(observer);
        }
        let reports = self.agent_reports();
        observer.on_sim_end(self.tick, &reports);
        info!(
            ticks           = self.tick.0,
            total_sanctions = self.total_sanctions,
            dead_agents     = reports.iter().filter(|r| r.is_dead).count(),
            "simulation end"
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// Process one tick without an observer and return its metrics.
    pub fn step(&mut self) -> TickMetrics {
        self.process_tick(self.tick)
    }

    /// Final state of every agent, in roster order.
    pub fn agent_reports(&self) -> Vec<AgentReport> {
        self.agents.iter().map(AgentReport::from_agent).collect()
    }

    /// Mean compliance probability per tick so far.
    pub fn compliance_series(&self) -> Vec<f64> {
        self.history.iter().map(|m| m.mean_compliance).collect()
    }

    /// Clean-cell percentage per tick so far.
    pub fn cleanliness_series(&self) -> Vec<f64> {
        self.history.iter().map(|m| m.clean_percentage).collect()
    }

    /// Cumulative sanction count per tick so far.
    pub fn sanction_series(&self) -> Vec<u64> {
        self.history.iter().map(|m| m.total_sanctions).collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_with<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        let trips_before = self.trips.len();

        observer.on_tick_start(now);
        let metrics = self.process_tick(now);
        for trip in &self.trips[trips_before..] {
            observer.on_trip_end(trip);
        }
        observer.on_tick_end(now, &metrics);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
    }

    fn process_tick(&mut self, now: Tick) -> TickMetrics {
        // ── Phase 1: observe ──────────────────────────────────────────────
        //
        // Built against the untouched roster, then assigned, so no agent's
        // observation depends on roster order.
        let previous = self.log.lagged(now);
        let radius = self.config.observation_radius;
        let observations: Vec<Observation> = self
            .agents
            .iter()
            .map(|agent| Observation::gather(agent, &self.agents, previous, radius))
            .collect();
        for (agent, obs) in self.agents.iter_mut().zip(observations) {
            agent.observation = obs;
        }

        // ── Phase 2: decide ───────────────────────────────────────────────
        let actions = self.decide_all(now);

        // ── Phase 3: record ───────────────────────────────────────────────
        self.log.record(actions.clone());

        // ── Phase 4: resolve and commit moves ─────────────────────────────
        for agent in &mut self.agents {
            agent.was_sanctioned = false;
        }
        let finals = resolve_moves(&self.agents, &actions, &self.map, &self.trash);
        for ((agent, action), pos) in self.agents.iter_mut().zip(&actions).zip(finals) {
            if let Some(target) = action.move_to {
                // A rejected step stays queued so the path never skips a cell.
                if pos != target && target != agent.current {
                    agent.path.push_front(target);
                }
            }
            agent.current = pos;
        }

        // ── Phase 5: central sanctions ────────────────────────────────────
        self.apply_central_sanctions(now);

        // ── Phase 6: action effects ───────────────────────────────────────
        self.apply_effects(now, &actions);

        // ── Phase 7: update ───────────────────────────────────────────────
        self.update_all(now);

        // ── Phase 8: measure ──────────────────────────────────────────────
        let metrics =
            TickMetrics::measure(now, &self.agents, &self.map, &self.trash, self.total_sanctions);
        trace!(
            tick            = now.0,
            mean_compliance = metrics.mean_compliance,
            clean_pct       = metrics.clean_percentage,
            total_sanctions = metrics.total_sanctions,
            "tick metrics"
        );
        self.history.push(metrics.clone());
        self.tick = now + 1;
        metrics
    }

    fn decide_all(&mut self, now: Tick) -> Vec<Action> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let model = &self.model;
        let ctx = DecisionContext::new(now, &self.config, &self.map, &self.trash);

        self.agents
            .iter_mut()
            .zip(self.rngs.iter_mut())
            .map(|(agent, rng)| {
                let was_dead = agent.is_dead;
                let action = model.decide(agent, &ctx, rng);
                if agent.is_dead && !was_dead {
                    warn!(
                        agent       = %agent.id,
                        position    = %agent.current,
                        destination = %agent.end,
                        tick        = now.0,
                        "no route; agent is dead"
                    );
                }
                action
            })
            .collect()
    }

    fn apply_central_sanctions(&mut self, now: Tick) {
        let method = self.config.method;

        if method == SanctionMethod::CentralisedTs
            && is_periodic_check(now, self.config.ts_interval)
        {
            let hit = sanction_registered(&mut self.agents, &mut self.litterers);
            self.total_sanctions += hit.len() as u64;
            debug!(tick = now.0, sanctioned = ?hit, "periodic sanctions");
        }

        let trip_end = match method {
            SanctionMethod::CentralisedEnd => true,
            SanctionMethod::Hybrid => self.rng.unit() >= self.config.hybrid_b,
            SanctionMethod::CentralisedTs | SanctionMethod::Decentralised => false,
        };
        if trip_end {
            let hit = sanction_at_trip_end(&mut self.agents);
            if !hit.is_empty() {
                self.total_sanctions += hit.len() as u64;
                debug!(tick = now.0, sanctioned = ?hit, "trip-end sanctions");
            }
        }
    }

    fn apply_effects(&mut self, now: Tick, actions: &[Action]) {
        for (i, action) in actions.iter().enumerate() {
            let Some(act) = &action.act else { continue };
            let pos = self.agents[i].current;
            match act {
                Act::Litter => {
                    self.trash.add(pos);
                    if self.config.method == SanctionMethod::CentralisedTs {
                        self.litterers.register(self.agents[i].id);
                    }
                    let agent = &mut self.agents[i];
                    if self.map.is_bin(pos) {
                        agent.used_bin_this_trip = true;
                        agent.first_bin_use_tick.get_or_insert(now);
                    } else {
                        agent.used_bin_this_trip = false;
                    }
                }
                Act::Dispose => {}
                Act::PickUpTrash => {
                    self.trash.remove_one(pos);
                }
                Act::Sanction { targets } => {
                    for target in targets {
                        if let Some(t) = self.agents.get_mut(target.index()) {
                            t.was_sanctioned = true;
                            self.total_sanctions += 1;
                        }
                    }
                    debug!(tick = now.0, by = %self.agents[i].id, targets = ?targets, "peer sanction");
                }
            }
        }
    }

    fn update_all(&mut self, now: Tick) {
        let model = &self.model;
        let ctx = DecisionContext::new(now, &self.config, &self.map, &self.trash);

        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            if agent.is_dead {
                continue;
            }
            let outcome = model.update(agent, &ctx, rng);
            if outcome.trip_end_sanction {
                self.total_sanctions += 1;
            }
            if let Some(trip) = outcome.trip {
                debug!(
                    tick     = now.0,
                    agent    = %agent.id,
                    trip     = trip.trip_id.0,
                    duration = trip.duration,
                    "trip complete"
                );
                self.trips.push(TripRecord {
                    tick:     now,
                    agent:    agent.id,
                    trip_id:  trip.trip_id,
                    duration: trip.duration,
                    from:     trip.from,
                    to:       trip.to,
                });
            }
        }
    }
}
