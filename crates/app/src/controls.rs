//! The control panel: four parameter sliders, a reset button and the R₀
//! readout.
//!
//! Controls never modify the view state directly. [`show`] draws the widgets
//! from the current parameters and returns the [`ControlEvent`]s the user
//! produced this frame; the view subscribes to them through
//! [`ViewState::dispatch`](crate::view::ViewState::dispatch).

use std::ops::RangeInclusive;

use eframe::egui;
use sirview_model::Parameters;

/// One adjustable model parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterId {
    Population,
    InitialInfected,
    Beta,
    Gamma,
}

impl ParameterId {
    pub const ALL: [Self; 4] = [
        Self::Population,
        Self::InitialInfected,
        Self::Beta,
        Self::Gamma,
    ];

    pub fn get(self, parameters: &Parameters) -> f64 {
        match self {
            Self::Population => parameters.population,
            Self::InitialInfected => parameters.initial_infected,
            Self::Beta => parameters.beta,
            Self::Gamma => parameters.gamma,
        }
    }

    pub fn set(self, parameters: &mut Parameters, value: f64) {
        let slot = match self {
            Self::Population => &mut parameters.population,
            Self::InitialInfected => &mut parameters.initial_infected,
            Self::Beta => &mut parameters.beta,
            Self::Gamma => &mut parameters.gamma,
        };
        *slot = value;
    }

    pub fn spec(self) -> &'static ControlSpec {
        &CONTROLS[self as usize]
    }
}

/// Label, range and step of one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    pub parameter: ParameterId,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub decimals: usize,
}

impl ControlSpec {
    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    /// Brings a value into the slider's range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Slider definitions, in [`ParameterId`] order.
pub static CONTROLS: [ControlSpec; 4] = [
    ControlSpec {
        parameter: ParameterId::Population,
        label: "Población total",
        min: 500.0,
        max: 50_000.0,
        step: 100.0,
        decimals: 0,
    },
    ControlSpec {
        parameter: ParameterId::InitialInfected,
        label: "Infectados iniciales",
        min: 10.0,
        max: 25_000.0,
        step: 10.0,
        decimals: 0,
    },
    ControlSpec {
        parameter: ParameterId::Beta,
        label: "Beta (β)",
        min: 0.01,
        max: 1.0,
        step: 0.01,
        decimals: 2,
    },
    ControlSpec {
        parameter: ParameterId::Gamma,
        label: "Gamma (γ)",
        min: 0.01,
        max: 0.5,
        step: 0.01,
        decimals: 2,
    },
];

pub const RESET_LABEL: &str = "Reset";

/// A change notification produced by the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// A slider moved to a new value.
    Changed { parameter: ParameterId, value: f64 },

    /// The reset button was pressed.
    Reset,
}

/// Draws the sliders and the reset button, returning this frame's events.
pub fn show(ui: &mut egui::Ui, parameters: &Parameters) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    ui.spacing_mut().slider_width = (ui.available_width() - 260.0).max(200.0);

    egui::Grid::new("parameter-sliders")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for spec in &CONTROLS {
                ui.label(spec.label);

                let mut value = spec.parameter.get(parameters);
                let slider = egui::Slider::new(&mut value, spec.range())
                    .step_by(spec.step)
                    .fixed_decimals(spec.decimals);

                if ui.add(slider).changed() {
                    events.push(ControlEvent::Changed {
                        parameter: spec.parameter,
                        value,
                    });
                }
                ui.end_row();
            }
        });

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button(RESET_LABEL).clicked() {
            events.push(ControlEvent::Reset);
        }
    });

    events
}

/// Draws the read-only R₀ readout and, if the last recompute failed, its error.
pub fn readout(ui: &mut egui::Ui, r0_text: &str, error: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(r0_text).monospace());
        if let Some(error) = error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, error);
        }
    });
}
