//! `ns-spatial`: grid map, trash field, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`layout`]  | `MapLayout` (static config), random layout generator        |
//! | [`map`]     | `GridMap`, `CellRole`, neighbourhood and passability        |
//! | [`trash`]   | `TrashField`: sparse per-cell trash counts                  |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`                      |
//! | [`planner`] | `PlannedRoute`, direct and via-bin planning, nearest bin    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `MapLayout`.            |

pub mod error;
pub mod layout;
pub mod map;
pub mod planner;
pub mod router;
pub mod trash;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use layout::MapLayout;
pub use map::{CellRole, GridMap, OBSTACLE_THRESHOLD};
pub use planner::{nearest, nearest_bin, plan_direct, plan_via_bin, PlannedRoute};
pub use router::{AStarRouter, Route, Router};
pub use trash::TrashField;
