use std::iter;

use ode_solvers::Dopri5;

use crate::{Parameters, SimulationError, SirSystem, TimeGrid, Trajectory};

/// Error tolerances for the adaptive integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub relative: f64,
    pub absolute: f64,
}

impl Tolerances {
    /// The `sqrt(f64::EPSILON)` tolerances of general-purpose ODE drivers.
    pub const DEFAULT: Self = Self {
        relative: 1.490_116_119_384_765_6e-8,
        absolute: 1.490_116_119_384_765_6e-8,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Integrator work counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub evaluations: u32,
    pub accepted: u32,
    pub rejected: u32,
}

/// The outcome of one SIR integration.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub trajectory: Trajectory,
    pub stats: Stats,
}

/// Integrates the SIR model over `grid` starting from `parameters`.
///
/// The run starts at the first grid time with `S = N - I0`, `I = I0`,
/// `R = 0` and uses the adaptive Dormand–Prince 5(4) method with dense
/// output at the grid spacing.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the integration fails.
pub fn simulate(
    parameters: &Parameters,
    grid: &TimeGrid,
    tolerances: &Tolerances,
) -> Result<Simulation, SimulationError> {
    parameters.validate()?;

    let y_start = parameters.initial_state().to_vector();
    let x_step = grid.spacing();

    // Dense output times are accumulated by repeated addition of `x_step`,
    // so the last one can land a rounding error past `grid.end()`.
    let x_end = grid.end() + 0.5 * x_step;

    let mut stepper = Dopri5::new(
        SirSystem::new(*parameters),
        grid.start(),
        x_end,
        x_step,
        y_start,
        tolerances.relative,
        tolerances.absolute,
    );
    let stats = stepper.integrate()?;

    let outputs = stepper
        .x_out()
        .iter()
        .copied()
        .zip(stepper.y_out().iter().copied());
    let trajectory =
        Trajectory::sample(grid, iter::once((grid.start(), y_start)).chain(outputs))?;

    Ok(Simulation {
        trajectory,
        stats: Stats {
            evaluations: stats.num_eval,
            accepted: stats.accepted_steps,
            rejected: stats.rejected_steps,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::ParameterError;

    #[test]
    fn samples_every_grid_point() {
        let grid = TimeGrid::default();
        let simulation = simulate(&Parameters::default(), &grid, &Tolerances::default()).unwrap();

        let trajectory = &simulation.trajectory;
        assert_eq!(trajectory.len(), grid.len());
        assert_eq!(trajectory.time, grid.times());
        assert_eq!(trajectory.susceptible[0], 7_000.0);
        assert_eq!(trajectory.infected[0], 3_000.0);
        assert_eq!(trajectory.recovered[0], 0.0);
        assert!(simulation.stats.accepted > 0);
        assert!(simulation.stats.evaluations > simulation.stats.accepted);
    }

    #[test]
    fn looser_tolerances_do_less_work() {
        let grid = TimeGrid::default();
        let params = Parameters::default();
        let loose = Tolerances {
            relative: 1e-4,
            absolute: 1e-4,
        };

        let tight = simulate(&params, &grid, &Tolerances::default()).unwrap();
        let rough = simulate(&params, &grid, &loose).unwrap();

        assert!(rough.stats.evaluations < tight.stats.evaluations);
        let last = grid.len() - 1;
        assert_relative_eq!(
            rough.trajectory.recovered[last],
            tight.trajectory.recovered[last],
            max_relative = 1e-3
        );
    }

    #[test]
    fn matches_exponential_recovery_without_transmission() {
        // With β → 0 the infected count decays as I0 e^{-γ t}.
        let params = Parameters {
            population: 10_000.0,
            initial_infected: 1_000.0,
            beta: 1e-12,
            gamma: 0.1,
        };
        let grid = TimeGrid::new(0.0, 20.0, 21).unwrap();
        let trajectory = simulate(&params, &grid, &Tolerances::default())
            .unwrap()
            .trajectory;

        for (&t, &infected) in trajectory.time.iter().zip(&trajectory.infected) {
            assert_relative_eq!(infected, 1_000.0 * (-0.1 * t).exp(), max_relative = 1e-6);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let params = Parameters {
            population: 0.0,
            ..Parameters::default()
        };
        let result = simulate(&params, &TimeGrid::default(), &Tolerances::default());

        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameters(ParameterError::Population))
        ));
    }
}
