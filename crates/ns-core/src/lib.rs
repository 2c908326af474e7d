//! `ns-core`: foundational types for the norm-sanctioning simulator.
//!
//! This crate is a dependency of every other `ns-*` crate.  It intentionally
//! has no `ns-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TripId`                                   |
//! | [`grid`]        | `GridPos`, Manhattan distance                         |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`method`]      | `SanctionMethod` enum                                 |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `NsError`, `NsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod method;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NsError, NsResult};
pub use grid::GridPos;
pub use ids::{AgentId, TripId};
pub use method::SanctionMethod;
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick};
