use crate::GridError;

/// Evenly spaced, strictly increasing sample times, inclusive of both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Horizon of the default grid, in days.
    pub const DEFAULT_END: f64 = 160.0;

    /// Number of points in the default grid.
    pub const DEFAULT_POINTS: usize = 160;

    /// Creates `count` evenly spaced times from `start` to `end`.
    ///
    /// The first and last points are exactly `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `end <= start`, or if
    /// `count < 2`.
    pub fn new(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFinite);
        }
        if end <= start {
            return Err(GridError::EmptySpan);
        }
        if count < 2 {
            return Err(GridError::TooFewPoints);
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = (end - start) / (count - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let mut times: Vec<f64> = (0..count).map(|i| start + spacing * i as f64).collect();
        times[count - 1] = end;

        Ok(Self { times })
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Distance between neighboring times.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.times[1] - self.times[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.0, Self::DEFAULT_END, Self::DEFAULT_POINTS).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_grid() {
        let grid = TimeGrid::default();

        assert_eq!(grid.len(), 160);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.end(), 160.0);
        assert_relative_eq!(grid.times()[1], 160.0 / 159.0);
        assert_relative_eq!(grid.spacing(), 160.0 / 159.0);
        assert!(!grid.is_empty());
        assert!(grid.times().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn two_point_grid() {
        let grid = TimeGrid::new(-1.0, 1.0, 2).unwrap();
        assert_eq!(grid.times(), [-1.0, 1.0]);
    }

    #[test]
    fn rejects_bad_grids() {
        assert_eq!(TimeGrid::new(0.0, f64::INFINITY, 10), Err(GridError::NonFinite));
        assert_eq!(TimeGrid::new(5.0, 5.0, 10), Err(GridError::EmptySpan));
        assert_eq!(TimeGrid::new(0.0, 1.0, 1), Err(GridError::TooFewPoints));
    }
}
