use ns_core::NsError;
use ns_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] NsError),

    #[error("invalid map: {0}")]
    Map(#[from] SpatialError),

    #[error("initial compliance probability {value} for agent {agent} is outside [0, 1]")]
    ProbabilityOutOfRange {
        agent: usize,
        value: f64,
    },

    #[error("{0} agents exceed the AgentId range")]
    TooManyAgents(usize),

    #[error("{0} agents need at least one house to start from")]
    NoHouses(usize),
}

pub type SimResult<T> = Result<T, SimError>;
