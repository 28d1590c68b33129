use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use sirview_model::Compartment;

use crate::view::ViewState;

pub const TITLE: &str = "Modelo SIR Interactivo";

const X_LABEL: &str = "Tiempo (días)";
const Y_LABEL: &str = "Número de individuos";

const LINE_WIDTH: f32 = 2.0;

// 70% opacity. Colors below are premultiplied by it.
const ALPHA: u8 = 179;

/// How one compartment is drawn.
struct Series {
    compartment: Compartment,
    name: &'static str,
    color: Color32,
}

const SERIES: [Series; 3] = [
    Series {
        compartment: Compartment::Susceptible,
        name: "Susceptibles (S)",
        color: Color32::from_rgba_premultiplied(0, 90, 0, ALPHA),
    },
    Series {
        compartment: Compartment::Infected,
        name: "Infectados (I)",
        color: Color32::from_rgba_premultiplied(179, 0, 0, ALPHA),
    },
    Series {
        compartment: Compartment::Recovered,
        name: "Recuperados (R)",
        color: Color32::from_rgba_premultiplied(0, 0, 0, ALPHA),
    },
];

/// Draws the title and the S, I, R line chart for the current view state.
///
/// The axes are pinned to the time grid horizontally and to `[0, y_max]`
/// vertically, so panning and zooming are disabled.
pub fn show(ui: &mut egui::Ui, view: &ViewState) {
    ui.vertical_centered(|ui| {
        ui.heading(TITLE);
    });

    let trajectory = view.trajectory();
    let bounds = PlotBounds::from_min_max(
        [view.grid().start(), 0.0],
        [view.grid().end(), view.y_max()],
    );

    Plot::new("sir-chart")
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(bounds);

            for series in &SERIES {
                let points: PlotPoints = trajectory.points(series.compartment).into_iter().collect();

                plot_ui.line(
                    Line::new(points)
                        .name(series.name)
                        .color(series.color)
                        .width(LINE_WIDTH),
                );
            }
        });
}
