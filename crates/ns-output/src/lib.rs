//! `ns-output`: simulation output writers for the norm-sanction model.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | Plain row types converted from `ns-sim` records        |
//! | [`writer`]   | The [`OutputWriter`] trait                             |
//! | [`csv`]      | [`CsvWriter`]: one CSV file per row type               |
//! | [`observer`] | [`SimOutputObserver`], a `SimObserver` over any writer |
//!
//! The CSV backend creates `tick_metrics.csv`, `agent_snapshots.csv`,
//! `trips.csv`, and `agent_summaries.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ns_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! world.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, AgentSummaryRow, TickMetricsRow, TripRow};
pub use writer::OutputWriter;
