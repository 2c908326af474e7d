//! Spatial-subsystem error type.

use thiserror::Error;

use ns_core::GridPos;

/// Errors produced by `ns-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GridPos, to: GridPos },

    #[error("position {pos} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error("position {0} is assigned more than one role")]
    DuplicatePosition(GridPos),

    #[error("grid must have positive width and height")]
    EmptyGrid,

    #[error("grid has {available} cells but the layout needs {needed}")]
    GridTooSmall { needed: usize, available: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
