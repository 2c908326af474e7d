//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter starting at 0.  One tick
//! is one synchronous step of the whole world: every agent observes, decides,
//! and is moved exactly once per tick.

use std::fmt;

use crate::{NsError, NsResult, SanctionMethod};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick before `self`, or `None` at tick 0.
    #[inline]
    pub fn previous(self) -> Option<Tick> {
        self.0.checked_sub(1).map(Tick)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON scenario file by the application crate and
/// passed to the world builder.  The map layout is configured separately
/// (`ns_spatial::MapLayout`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Sanctioning regime for the whole run.
    pub method: SanctionMethod,

    /// Hybrid split probability `b`: chance per tick that an agent may
    /// peer-sanction; `1 - b` is the chance the central trip-end check runs.
    pub hybrid_b: f64,

    /// Centralised-ts interval `t`: litterers are sanctioned every `t` ticks.
    pub ts_interval: u64,

    /// Manhattan radius within which agents perceive each other.
    pub observation_radius: u32,

    /// Emit per-agent snapshots every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           400,
            seed:                  0,
            method:                SanctionMethod::default(),
            hybrid_b:              0.5,
            ts_interval:           10,
            observation_radius:    1,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject out-of-range parameters.
    pub fn validate(&self) -> NsResult<()> {
        if !(0.0..=1.0).contains(&self.hybrid_b) {
            return Err(NsError::Config(format!(
                "hybrid_b must lie in [0, 1], got {}",
                self.hybrid_b
            )));
        }
        if self.ts_interval == 0 {
            return Err(NsError::Config("ts_interval must be at least 1".into()));
        }
        Ok(())
    }
}
