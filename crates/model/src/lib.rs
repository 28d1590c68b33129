//! The SIR (Susceptible–Infected–Recovered) compartmental epidemic model.
//!
//! A fixed population of size `N` is split into three compartments that evolve
//! by mass-action kinetics:
//!
//! ```text
//! dS/dt = -β S I / N
//! dI/dt =  β S I / N - γ I
//! dR/dt =  γ I
//! ```
//!
//! [`rates`] evaluates the right-hand side, [`SirSystem`] exposes it to the
//! `ode_solvers` integrators, and [`simulate`] samples a run over a
//! [`TimeGrid`] into a [`Trajectory`].

mod compartments;
mod error;
mod grid;
mod parameters;
mod simulate;
mod sir;
mod trajectory;

pub use compartments::{Compartment, Compartments, Rates, StateVector};
pub use error::{GridError, ParameterError, SimulationError};
pub use grid::TimeGrid;
pub use parameters::Parameters;
pub use simulate::{Simulation, Stats, Tolerances, simulate};
pub use sir::{SirSystem, rates};
pub use trajectory::Trajectory;
