use thiserror::Error;
use tt_core::{BusId, CoreError};
use tt_network::NetworkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("bus id {0} appears more than once in the fleet")]
    DuplicateBus(BusId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("route catalog error: {0}")]
    Network(#[from] NetworkError),

    #[error("real-time ticker task failed: {0}")]
    Realtime(String),
}

pub type SimResult<T> = Result<T, SimError>;
