//! Sanctioning regime enum shared by the agent and world crates.
//!
//! The string forms are the names used in scenario files and output columns.

use std::str::FromStr;

use crate::NsError;

/// Who is allowed to sanction a litterer, and when.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SanctionMethod {
    /// A central authority sanctions litterers when they finish their trip.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Centralised-end"))]
    CentralisedEnd,
    /// A central authority sanctions everyone who littered in the last `t`
    /// ticks, every `t` ticks.
    #[cfg_attr(feature = "serde", serde(rename = "Centralised-ts"))]
    CentralisedTs,
    /// Compliant agents sanction litterers they observed.
    Decentralised,
    /// Peer sanctioning with probability `b` per tick, central trip-end
    /// sanctioning otherwise.
    Hybrid,
}

impl SanctionMethod {
    pub const ALL: [SanctionMethod; 4] = [
        SanctionMethod::CentralisedEnd,
        SanctionMethod::CentralisedTs,
        SanctionMethod::Decentralised,
        SanctionMethod::Hybrid,
    ];

    /// `true` for regimes in which agents sanction each other.
    #[inline]
    pub fn allows_peer_sanctions(self) -> bool {
        matches!(self, SanctionMethod::Decentralised | SanctionMethod::Hybrid)
    }

    /// Label used in scenario files and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            SanctionMethod::CentralisedEnd => "Centralised-end",
            SanctionMethod::CentralisedTs  => "Centralised-ts",
            SanctionMethod::Decentralised  => "Decentralised",
            SanctionMethod::Hybrid         => "Hybrid",
        }
    }
}

impl std::fmt::Display for SanctionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanctionMethod {
    type Err = NsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SanctionMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NsError::Parse(format!("unknown sanctioning method {s:?}")))
    }
}
