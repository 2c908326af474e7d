//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `tick_metrics.csv`
//! - `agent_snapshots.csv`
//! - `trips.csv`
//! - `agent_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, AgentSummaryRow, OutputError, OutputResult, TickMetricsRow, TripRow};

pub const TICK_METRICS_HEADER: [&str; 6] = [
    "tick",
    "mean_compliance",
    "clean_cells",
    "clean_percentage",
    "total_sanctions",
    "dead_agents",
];

pub const SNAPSHOT_HEADER: [&str; 9] = [
    "agent_id",
    "tick",
    "x",
    "y",
    "compliant_prob",
    "sanctioned",
    "trip_id",
    "trash_count",
    "is_dead",
];

pub const TRIP_HEADER: [&str; 8] =
    ["tick", "agent_id", "trip_id", "duration", "from_x", "from_y", "to_x", "to_y"];

pub const SUMMARY_HEADER: [&str; 7] = [
    "agent_id",
    "compliant_prob",
    "sanctioned",
    "trips_completed",
    "mean_trip_duration",
    "first_bin_use_tick",
    "is_dead",
];

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    snapshots: Writer<File>,
    trips:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the four CSV files, and write their
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join("tick_metrics.csv"))?;
        metrics.write_record(TICK_METRICS_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record(TRIP_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("agent_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            metrics,
            snapshots,
            trips,
            summaries,
            finished: false,
        })
    }

    fn check_open(&self) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        Ok(())
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.check_open()?;
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.mean_compliance.to_string(),
            row.clean_cells.to_string(),
            row.clean_percentage.to_string(),
            row.total_sanctions.to_string(),
            row.dead_agents.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.compliant_prob.to_string(),
                row.sanctioned.to_string(),
                row.trip_id.to_string(),
                row.trash_count.to_string(),
                (row.is_dead as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.check_open()?;
        self.trips.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            row.trip_id.to_string(),
            row.duration.to_string(),
            row.from_x.to_string(),
            row.from_y.to_string(),
            row.to_x.to_string(),
            row.to_y.to_string(),
        ])?;
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.summaries.write_record(&[
                row.agent_id.to_string(),
                row.compliant_prob.to_string(),
                row.sanctioned.to_string(),
                row.trips_completed.to_string(),
                optional(row.mean_trip_duration),
                optional(row.first_bin_use_tick),
                (row.is_dead as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.snapshots.flush()?;
        self.trips.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
