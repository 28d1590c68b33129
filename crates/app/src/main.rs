use eframe::egui;

use sirview::{app::SirApp, chart, logging, view::ViewState};

fn main() -> eframe::Result<()> {
    logging::init();

    // Populate the plot before the first frame is drawn.
    let view = ViewState::new();
    tracing::info!(r0 = view.r0_text(), "initial simulation ready");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(chart::TITLE)
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        chart::TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(SirApp::new(view)))
        }),
    );

    match &result {
        Ok(()) => tracing::info!("window closed"),
        Err(err) => tracing::error!("failed to run viewer: {err}"),
    }
    result
}
