use crate::{Compartments, ParameterError};

/// Inputs that fully determine one SIR run.
///
/// The recovered compartment always starts empty, so the initial state is
/// `S0 = N - I0`, `I0`, `R0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Total population `N`.
    pub population: f64,

    /// Infected count at `t = 0`.
    pub initial_infected: f64,

    /// Transmission rate β, per day.
    pub beta: f64,

    /// Recovery rate γ, per day.
    pub gamma: f64,
}

impl Parameters {
    /// Parameters the viewer starts with and resets to.
    pub const DEFAULT: Self = Self {
        population: 10_000.0,
        initial_infected: 3_000.0,
        beta: 0.2,
        gamma: 0.1,
    };

    /// The compartment counts at `t = 0`.
    #[must_use]
    pub fn initial_state(&self) -> Compartments {
        Compartments {
            susceptible: self.population - self.initial_infected,
            infected: self.initial_infected,
            recovered: 0.0,
        }
    }

    /// Basic reproduction number `R₀ = β / γ`.
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta / self.gamma
    }

    /// Checks that the parameters describe a meaningful epidemic.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: a finite positive population,
    /// an initial infected count in `[0, N]`, and finite positive rates.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.population.is_finite() || self.population <= 0.0 {
            return Err(ParameterError::Population);
        }
        if !(0.0..=self.population).contains(&self.initial_infected) {
            return Err(ParameterError::InitialInfected);
        }
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(ParameterError::Beta);
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ParameterError::Gamma);
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
