//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, AgentSummaryRow, OutputResult, TickMetricsRow, TripRow};

/// A sink for simulation output rows.
///
/// Driven by [`SimOutputObserver`][crate::SimOutputObserver], which stores
/// the first error instead of propagating it.
pub trait OutputWriter {
    /// Write one tick's aggregates.
    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one completed trip.
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()>;

    /// Write the end-of-run summaries.
    fn write_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
