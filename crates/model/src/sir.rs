use ode_solvers::System;

use crate::{Compartments, Parameters, Rates, StateVector};

/// Evaluates the SIR right-hand side for one state.
///
/// Only `population`, `beta` and `gamma` are read from `parameters`. The
/// population must be nonzero.
#[must_use]
pub fn rates(state: &Compartments, parameters: &Parameters) -> Rates {
    let Parameters {
        population,
        beta,
        gamma,
        ..
    } = *parameters;

    let infections = beta * state.susceptible * state.infected / population;
    let recoveries = gamma * state.infected;

    Rates {
        susceptible: -infections,
        infected: infections - recoveries,
        recovered: recoveries,
    }
}

/// The SIR equations with fixed parameters, as an ODE system over `[S, I, R]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirSystem {
    parameters: Parameters,
}

impl SirSystem {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }
}

impl System<f64, StateVector> for SirSystem {
    fn system(&self, _t: f64, y: &StateVector, dy: &mut StateVector) {
        *dy = rates(&Compartments::from(*y), &self.parameters).to_vector();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rates_at_default_start() {
        let params = Parameters::default();
        let rates = rates(&params.initial_state(), &params);

        // β S I / N = 0.2 * 7000 * 3000 / 10000 = 420; γ I = 300.
        assert_relative_eq!(rates.susceptible, -420.0);
        assert_relative_eq!(rates.infected, 120.0);
        assert_relative_eq!(rates.recovered, 300.0);
    }

    #[test]
    fn rates_sum_to_zero() {
        let params = Parameters {
            population: 1234.0,
            initial_infected: 5.0,
            beta: 0.73,
            gamma: 0.11,
        };
        let state = Compartments {
            susceptible: 800.0,
            infected: 234.0,
            recovered: 200.0,
        };
        let rates = rates(&state, &params);

        let sum = rates.susceptible + rates.infected + rates.recovered;
        assert_relative_eq!(sum, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn no_infected_means_no_change() {
        let params = Parameters::default();
        let state = Compartments {
            susceptible: 10_000.0,
            infected: 0.0,
            recovered: 0.0,
        };
        assert_eq!(rates(&state, &params), Rates::default());
    }

    #[test]
    fn system_writes_rates_in_state_order() {
        let params = Parameters::default();
        let system = SirSystem::new(params);

        let y = params.initial_state().to_vector();
        let mut dy = StateVector::zeros();
        system.system(3.0, &y, &mut dy);

        assert_relative_eq!(dy[0], -420.0);
        assert_relative_eq!(dy[1], 120.0);
        assert_relative_eq!(dy[2], 300.0);
    }
}
