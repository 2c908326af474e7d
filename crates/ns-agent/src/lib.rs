//! `ns-agent`: agent state and the per-tick decision engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`agent`]       | `Agent`: position, route, compliance, trip and sanction state  |
//! | [`action`]      | `Action` (one act plus a move intent), `Act`                 |
//! | [`observation`] | `Observation`, `Neighbour`: what an agent sees each tick     |
//! | [`context`]     | `DecisionContext<'a>`: read-only world view for one phase    |
//! | [`decision`]    | `decide`: priority-ordered action selection                  |
//! | [`update`]      | `update_agent`, `begin_trip`, `sigmoid`, trip rollover       |
//! | [`model`]       | `AgentModel` trait, `NormModel`                              |
//!
//! # Design notes
//!
//! The step engine in ns-sim drives agents in separate phases:
//!
//! 1. **Observe**: every agent's [`Observation`] is built from the roster
//!    and the previous tick's action log before any agent decides.
//! 2. **Decide**: [`AgentModel::decide`] mutates only the deciding agent's
//!    own bookkeeping and returns an [`Action`].
//! 3. **Apply**: the engine resolves moves and applies acts to the world.
//! 4. **Update**: [`AgentModel::update`] starts and rolls trips over, accrues
//!    sanctions, reporting back through [`UpdateOutcome`].

pub mod action;
pub mod agent;
pub mod context;
pub mod decision;
pub mod model;
pub mod observation;
pub mod update;


pub use action::{Act, Action};
pub use agent::Agent;
pub use context::DecisionContext;
pub use decision::decide;
pub use model::{AgentModel, NormModel};
pub use observation::{Neighbour, Observation};
pub use update::{
    begin_trip, compliance_for, sigmoid, update_agent, CompletedTrip, UpdateOutcome, COMPLIANCE_K,
    COMPLIANCE_X0,
};
