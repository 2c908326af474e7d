//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ns_agent::Agent;
use ns_core::Tick;
use ns_sim::{AgentReport, SimObserver, TickMetrics, TripRecord};

use crate::row::{AgentSnapshotRow, AgentSummaryRow, TickMetricsRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards tick metrics, snapshots, trips, and the
/// final summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `world.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_trip_end(&mut self, trip: &TripRecord) {
        let result = self.writer.write_trip(&TripRow::from(trip));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _tick: Tick, metrics: &TickMetrics) {
        let result = self.writer.write_tick_metrics(&TickMetricsRow::from(metrics));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentSnapshotRow> =
            agents.iter().map(|a| AgentSnapshotRow::capture(tick, a)).collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, reports: &[AgentReport]) {
        let rows: Vec<AgentSummaryRow> = reports.iter().map(AgentSummaryRow::from).collect();
        let result = self.writer.write_summaries(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
