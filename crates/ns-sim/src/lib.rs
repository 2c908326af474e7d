//! `ns-sim`: the world step engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Observe:    every agent snapshots its neighbourhood and the
//!                 previous tick's action row.
//!   ② Decide:     AgentModel::decide for every agent, in roster order.
//!   ③ Record:     the action row is appended to the ActionLog.
//!   ④ Move:       sanction flags cleared; proposals collected, contested
//!                 cells rejected, survivors committed together.
//!   ⑤ Sanction:   Centralised-ts periodic check, then trip-end sanctions
//!                 (Centralised-end, or Hybrid with probability 1 - b).
//!   ⑥ Effects:    litter, pick-up, and peer sanctions.
//!   ⑦ Update:     AgentModel::update: trip rollover, compliance, accrual.
//!   ⑧ Measure:    TickMetrics appended to the history.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ns_core::SimConfig;
//! use ns_sim::{NoopObserver, WorldBuilder};
//! use ns_spatial::MapLayout;
//!
//! let mut world = WorldBuilder::new(SimConfig::default(), layout)
//!     .agents(10, 0.5)
//!     .build()?;
//! world.run(&mut NoopObserver);
//! println!("{:?}", world.compliance_series().last());
//! ```

pub mod builder;
pub mod conflict;
pub mod error;
pub mod log;
pub mod metrics;
pub mod observer;
pub mod sanction;
pub mod world;


pub use builder::WorldBuilder;
pub use conflict::resolve_moves;
pub use error::{SimError, SimResult};
pub use log::ActionLog;
pub use metrics::{AgentReport, TickMetrics, TripRecord};
pub use observer::{NoopObserver, SimObserver};
pub use sanction::LitterRegister;
pub use world::World;
