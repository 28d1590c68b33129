use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// Reasons a parameter set is rejected before simulation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("population must be finite and positive")]
    Population,

    #[error("initial infected count must lie between zero and the population")]
    InitialInfected,

    #[error("beta must be finite and positive")]
    Beta,

    #[error("gamma must be finite and positive")]
    Gamma,
}

/// Reasons a time grid cannot be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("time grid bounds must be finite")]
    NonFinite,

    #[error("time grid end must be after its start")]
    EmptySpan,

    #[error("time grid needs at least two points")]
    TooFewPoints,
}

/// Errors that can occur while simulating the SIR model.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    #[error("integration failed: {0}")]
    Integration(#[from] IntegrationError),

    #[error("integrator produced no state at t = {time}")]
    MissingSample { time: f64 },
}
