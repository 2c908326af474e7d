//! town: one norm-sanctioning run on a generated grid town.
//!
//! ```text
//! cargo run -p town                      # reference scenario
//! cargo run -p town -- scenario.json     # override any field
//! RUST_LOG=ns_sim=debug cargo run -p town
//! ```
//!
//! Missing scenario fields fall back to the reference experiment: a 20×20
//! grid, 10 agents, `b = 0.5`, `t = 10`, radius 1, 400 ticks, initial
//! compliance 0.5.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ns_core::{SanctionMethod, SimConfig, SimRng};
use ns_output::{CsvWriter, SimOutputObserver};
use ns_sim::WorldBuilder;
use ns_spatial::MapLayout;

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Stream offset for layout generation, so the map does not share draws with
/// the run itself.
const LAYOUT_STREAM: u64 = 1;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    width:                 u32,
    height:                u32,
    agents:                usize,
    method:                SanctionMethod,
    hybrid_b:              f64,
    ts_interval:           u64,
    observation_radius:    u32,
    steps:                 u64,
    seed:                  u64,
    initial_compliance:    f64,
    output_interval_ticks: u64,
    output_dir:            PathBuf,
    /// Fixed layout; generated from `seed` when absent.
    layout:                Option<MapLayout>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            width:                 20,
            height:                20,
            agents:                10,
            method:                SanctionMethod::CentralisedEnd,
            hybrid_b:              0.5,
            ts_interval:           10,
            observation_radius:    1,
            steps:                 400,
            seed:                  42,
            initial_compliance:    0.5,
            output_interval_ticks: 1,
            output_dir:            PathBuf::from("output/town"),
            layout:                None,
        }
    }
}

impl Scenario {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    fn config(&self) -> SimConfig {
        SimConfig {
            total_ticks:           self.steps,
            seed:                  self.seed,
            method:                self.method,
            hybrid_b:              self.hybrid_b,
            ts_interval:           self.ts_interval,
            observation_radius:    self.observation_radius,
            output_interval_ticks: self.output_interval_ticks,
        }
    }

    fn layout(&self) -> Result<MapLayout> {
        if let Some(layout) = &self.layout {
            return Ok(layout.clone());
        }
        let mut rng = SimRng::new(self.seed).child(LAYOUT_STREAM);
        let layout = MapLayout::generate(self.agents, self.width, self.height, &mut rng)?;
        Ok(layout)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scenario = match std::env::args_os().nth(1) {
        Some(path) => Scenario::load(Path::new(&path))?,
        None => Scenario::default(),
    };

    // 1. Map.
    let layout = scenario.layout()?;
    info!(
        width   = layout.width,
        height  = layout.height,
        houses  = layout.houses.len(),
        offices = layout.offices.len(),
        parks   = layout.parks.len(),
        bins    = layout.bins.len(),
        "layout ready"
    );

    // 2. World.
    let mut world = WorldBuilder::new(scenario.config(), layout)
        .agents(scenario.agents, scenario.initial_compliance)
        .build()?;

    // 3. Output.
    let writer = CsvWriter::new(&scenario.output_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    world.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing CSV output");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Output written to {}", scenario.output_dir.display());
    if let Some(last) = world.history.last() {
        println!(
            "Final tick {}: mean compliance {:.3}, {:.1}% clean, {} sanctions, {} dead",
            last.tick,
            last.mean_compliance,
            last.clean_percentage,
            last.total_sanctions,
            last.dead_agents,
        );
    }
    println!();

    println!("{:<8} {:<12} {:<10} {:<8} {:<10}", "Agent", "Compliance", "Sanctions", "Trips", "Mean trip");
    println!("{}", "-".repeat(52));
    for report in world.agent_reports() {
        let mean = report
            .mean_trip_duration()
            .map(|d| format!("{d:.1}"))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<8} {:<12.3} {:<10} {:<8} {:<10}{}",
            report.agent.0,
            report.compliant_prob,
            report.sanctioned,
            report.trip_durations.len(),
            mean,
            if report.is_dead { " (dead)" } else { "" },
        );
    }

    Ok(())
}
