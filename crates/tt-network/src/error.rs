//! Catalog error type.

use thiserror::Error;

use tt_core::{CoreError, RouteId, StopId};

/// Errors produced by `tt-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("route {0} has an empty path")]
    EmptyPath(RouteId),

    #[error("duplicate route id {0}")]
    DuplicateRoute(RouteId),

    #[error("duplicate stop id {0}")]
    DuplicateStop(StopId),

    #[error("stop {stop} references unknown route {route}")]
    UnknownRoute { stop: StopId, route: RouteId },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
