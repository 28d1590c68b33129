use crate::{Compartment, Compartments, SimulationError, StateVector, TimeGrid};

/// Compartment counts sampled at each point of a time grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub susceptible: Vec<f64>,
    pub infected: Vec<f64>,
    pub recovered: Vec<f64>,
}

impl Trajectory {
    /// Picks one integrator output for every grid time.
    ///
    /// `outputs` must be ordered by time. Outputs that do not fall on a grid
    /// time (within a millionth of the spacing) are skipped; the grid times
    /// themselves are stored, not the integrator's accumulated ones.
    pub(crate) fn sample(
        grid: &TimeGrid,
        outputs: impl IntoIterator<Item = (f64, StateVector)>,
    ) -> Result<Self, SimulationError> {
        let tolerance = 1e-6 * grid.spacing();
        let mut outputs = outputs.into_iter();

        let mut trajectory = Self {
            time: Vec::with_capacity(grid.len()),
            susceptible: Vec::with_capacity(grid.len()),
            infected: Vec::with_capacity(grid.len()),
            recovered: Vec::with_capacity(grid.len()),
        };

        for &time in grid.times() {
            let (_, y) = outputs
                .find(|(t, _)| (t - time).abs() <= tolerance)
                .ok_or(SimulationError::MissingSample { time })?;

            let counts = Compartments::from(y);
            trajectory.time.push(time);
            trajectory.susceptible.push(counts.susceptible);
            trajectory.infected.push(counts.infected);
            trajectory.recovered.push(counts.recovered);
        }

        Ok(trajectory)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the samples of one compartment.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> &[f64] {
        match compartment {
            Compartment::Susceptible => &self.susceptible,
            Compartment::Infected => &self.infected,
            Compartment::Recovered => &self.recovered,
        }
    }

    /// Returns `[t, count]` pairs for one compartment, ready for plotting.
    #[must_use]
    pub fn points(&self, compartment: Compartment) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.series(compartment))
            .map(|(&t, &y)| [t, y])
            .collect()
    }

    /// Time and size of the largest infected count.
    #[must_use]
    pub fn peak_infected(&self) -> Option<(f64, f64)> {
        self.time
            .iter()
            .zip(&self.infected)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&t, &i)| (t, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Trajectory {
        Trajectory {
            time: vec![0.0, 1.0, 2.0],
            susceptible: vec![90.0, 80.0, 75.0],
            infected: vec![10.0, 15.0, 12.0],
            recovered: vec![0.0, 5.0, 13.0],
        }
    }

    fn output(t: f64, infected: f64) -> (f64, StateVector) {
        (t, StateVector::new(100.0 - infected, infected, 0.0))
    }

    #[test]
    fn points_pair_time_with_counts() {
        let trajectory = fixture();
        assert_eq!(
            trajectory.points(Compartment::Infected),
            vec![[0.0, 10.0], [1.0, 15.0], [2.0, 12.0]]
        );
    }

    #[test]
    fn peak() {
        assert_eq!(fixture().peak_infected(), Some((1.0, 15.0)));
        assert_eq!(Trajectory::default().peak_infected(), None);
    }

    #[test]
    fn sampling_skips_duplicates_and_snaps_to_grid() {
        let grid = TimeGrid::new(0.0, 2.0, 3).unwrap();
        let outputs = [
            output(0.0, 1.0),
            output(0.0, 99.0),
            output(0.5, 99.0),
            output(1.0 + 1e-12, 2.0),
            output(2.0 - 1e-12, 3.0),
            output(2.5, 99.0),
        ];

        let trajectory = Trajectory::sample(&grid, outputs).unwrap();

        assert_eq!(trajectory.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(trajectory.infected, vec![1.0, 2.0, 3.0]);
        assert_eq!(trajectory.susceptible, vec![99.0, 98.0, 97.0]);
    }

    #[test]
    fn sampling_reports_missing_grid_time() {
        let grid = TimeGrid::new(0.0, 2.0, 3).unwrap();
        let outputs = [output(0.0, 1.0), output(1.0, 2.0)];

        let result = Trajectory::sample(&grid, outputs);

        assert!(matches!(
            result,
            Err(SimulationError::MissingSample { time }) if time == 2.0
        ));
    }
}
