use ode_solvers::Vector3;

/// Solver state vector, ordered `[S, I, R]`.
pub type StateVector = Vector3<f64>;

/// One of the three SIR compartments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
}

impl Compartment {
    /// All compartments in state-vector order.
    pub const ALL: [Self; 3] = [Self::Susceptible, Self::Infected, Self::Recovered];
}

/// Head counts per compartment at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Compartments {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl Compartments {
    #[must_use]
    pub fn to_vector(&self) -> StateVector {
        StateVector::new(self.susceptible, self.infected, self.recovered)
    }
}

impl From<StateVector> for Compartments {
    fn from(y: StateVector) -> Self {
        Self {
            susceptible: y[0],
            infected: y[1],
            recovered: y[2],
        }
    }
}

/// Instantaneous rates of change per compartment, in individuals per day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl Rates {
    #[must_use]
    pub fn to_vector(&self) -> StateVector {
        StateVector::new(self.susceptible, self.infected, self.recovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_order_is_s_i_r() {
        let counts = Compartments {
            susceptible: 1.0,
            infected: 2.0,
            recovered: 3.0,
        };

        let y = counts.to_vector();
        assert_eq!((y[0], y[1], y[2]), (1.0, 2.0, 3.0));
        assert_eq!(Compartments::from(y), counts);
    }
}
