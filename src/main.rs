#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1000., 720.))
            .with_min_inner_size(vec2(640.0, 480.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(lifegrid::App::new(&cc.egui_ctx)))),
    )
    .unwrap();
}
