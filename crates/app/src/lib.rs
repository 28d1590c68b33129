//! Interactive viewer for the SIR epidemic model.
//!
//! The `sirview` binary opens a single window with a plot of S(t), I(t) and
//! R(t) and four sliders for the population, initial infected count, β and γ.
//! Every change re-runs the integration and redraws the plot. The process
//! exits when the window is closed.
//!
//! - [`view`] — the owned view state and its update/reset operations
//! - [`controls`] — slider definitions and the change events they emit
//! - [`chart`] — rendering of the three series
//! - [`app`] — the eframe application tying them together

pub mod app;
pub mod chart;
pub mod controls;
pub mod logging;
pub mod view;
