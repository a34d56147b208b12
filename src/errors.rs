use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Fatal conditions raised while simulating a route swap.
///
/// Any of these aborts the whole simulation before a single hop result is
/// produced; the caller never sees a partial hop breakdown. A drained pool is
/// not an error and is handled inline by the simulator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    #[error("Asset {asset_in} is not traded by pool {pool_id}")]
    InvalidHop { pool_id: String, asset_in: String },

    #[error("Invalid input amount: {0}")]
    InvalidAmount(String),

    #[error("Route must contain at least one hop")]
    EmptyRoute,
}
