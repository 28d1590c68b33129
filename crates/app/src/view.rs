//! The owned view state: current parameters, the latest trajectory and the
//! derived readouts.
//!
//! The view moves between two states only. It is idle until
//! [`ViewState::dispatch`] receives events; applying them and recomputing the
//! trajectory happens synchronously inside that call.

use std::{collections::VecDeque, time::Instant};

use sirview_model::{Parameters, Simulation, TimeGrid, Tolerances, Trajectory, simulate};

use crate::controls::{ControlEvent, ParameterId};

/// Headroom above the population on the vertical axis.
const Y_HEADROOM: f64 = 1.05;

/// Formats the R₀ readout.
pub fn format_r0(r0: f64) -> String {
    format!("R0 (β/γ): {r0:.2}")
}

pub struct ViewState {
    parameters: Parameters,
    grid: TimeGrid,
    tolerances: Tolerances,
    trajectory: Trajectory,
    y_max: f64,
    r0_text: String,
    error: Option<String>,
    updates: u64,
}

impl ViewState {
    /// Creates the view with default parameters and runs the first update.
    pub fn new() -> Self {
        Self::with_parameters(Parameters::DEFAULT)
    }

    pub fn with_parameters(parameters: Parameters) -> Self {
        let mut view = Self {
            parameters,
            grid: TimeGrid::default(),
            tolerances: Tolerances::default(),
            trajectory: Trajectory::default(),
            y_max: 0.0,
            r0_text: String::new(),
            error: None,
            updates: 0,
        };
        view.update();
        view
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Upper limit of the vertical axis.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn r0_text(&self) -> &str {
        &self.r0_text
    }

    /// Message from the last failed recompute, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of recomputes since the view was created.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Applies control events and recomputes once if any parameter changed.
    ///
    /// Events are processed in order. A reset re-enters the queue as one
    /// change per parameter, so it follows the same path as slider moves.
    /// Returns whether a recompute ran.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = ControlEvent>) -> bool {
        let mut queue: VecDeque<ControlEvent> = events.into_iter().collect();
        let mut changed = false;

        while let Some(event) = queue.pop_front() {
            match event {
                ControlEvent::Changed { parameter, value } => {
                    changed |= self.apply_change(parameter, value);
                }
                ControlEvent::Reset => {
                    tracing::info!("restoring default parameters");
                    queue.extend(ParameterId::ALL.map(|parameter| ControlEvent::Changed {
                        parameter,
                        value: parameter.get(&Parameters::DEFAULT),
                    }));
                }
            }
        }

        if changed {
            self.update();
        }
        changed
    }

    /// Restores the default parameters through the change-notification path.
    pub fn reset(&mut self) -> bool {
        self.dispatch([ControlEvent::Reset])
    }

    /// Re-runs the integration for the current parameters.
    ///
    /// On failure the previous trajectory stays on screen and the error is
    /// kept for display.
    pub fn update(&mut self) {
        let started = Instant::now();
        self.updates += 1;
        self.y_max = Y_HEADROOM * self.parameters.population;
        self.r0_text = format_r0(self.parameters.basic_reproduction_number());

        match simulate(&self.parameters, &self.grid, &self.tolerances) {
            Ok(Simulation { trajectory, stats }) => {
                let (peak_day, peak_infected) = trajectory.peak_infected().unwrap_or_default();
                tracing::debug!(
                    update = self.updates,
                    population = self.parameters.population,
                    initial_infected = self.parameters.initial_infected,
                    beta = self.parameters.beta,
                    gamma = self.parameters.gamma,
                    evaluations = stats.evaluations,
                    accepted = stats.accepted,
                    rejected = stats.rejected,
                    peak_day,
                    peak_infected,
                    elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
                    "recomputed trajectory"
                );
                self.trajectory = trajectory;
                self.error = None;
            }
            Err(err) => {
                tracing::error!(parameters = ?self.parameters, "failed to recompute trajectory: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Stores one parameter value, returning whether anything changed.
    fn apply_change(&mut self, parameter: ParameterId, value: f64) -> bool {
        let before = self.parameters;
        parameter.set(&mut self.parameters, parameter.spec().clamp(value));
        self.bound_initial_infected();
        self.parameters != before
    }

    /// Keeps the initial infected count strictly below the population.
    ///
    /// The two sliders move independently, so lowering the population can
    /// leave `I0 >= N`. The count is pulled down to one slider step below `N`.
    fn bound_initial_infected(&mut self) {
        let limit = self.parameters.population - ParameterId::InitialInfected.spec().step;
        if self.parameters.initial_infected > limit {
            tracing::debug!(
                requested = self.parameters.initial_infected,
                limit,
                "clamping initial infected below population"
            );
            self.parameters.initial_infected = limit;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
