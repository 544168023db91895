use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const GRID_SIZE: usize = 50;
    pub const FILL_RATE: f64 = 0.3;

    pub const TICK_INTERVAL_MS: u64 = 100;
    pub const MIN_TICK_INTERVAL_MS: u64 = 50;
    pub const MAX_TICK_INTERVAL_MS: u64 = 500;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 280.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_GRAY: u8 = 0xff;
    pub const DEAD_GRAY: u8 = 0x00;
}
