use eframe::egui;

use crate::{chart, controls, view::ViewState};

/// The eframe application: a control panel along the bottom and the chart
/// filling the rest of the window.
pub struct SirApp {
    view: ViewState,
}

impl SirApp {
    pub fn new(view: ViewState) -> Self {
        Self { view }
    }
}

impl eframe::App for SirApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = &mut self.view;

        egui::TopBottomPanel::bottom("controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                let events = controls::show(ui, view.parameters());
                if view.dispatch(events) {
                    ctx.request_repaint();
                }

                controls::readout(ui, view.r0_text(), view.error());
                ui.add_space(8.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chart::show(ui, view);
        });
    }
}
