//! Simulation observer trait for progress reporting and data collection.

use ns_agent::Agent;
use ns_core::Tick;

use crate::{AgentReport, TickMetrics, TripRecord};

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, metrics: &TickMetrics) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {:.1}% clean", metrics.clean_percentage);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once for every trip completed during `tick`, in roster order,
    /// before [`on_tick_end`][Self::on_tick_end].
    fn on_trip_end(&mut self, _trip: &TripRecord) {}

    /// Called at the end of each tick with that tick's aggregates.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &TickMetrics) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the whole roster.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _reports: &[AgentReport]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
