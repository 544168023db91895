use super::Config;
use crate::Universe;
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) universe: Universe,      // The grid plus its generation counter.
    pub(super) is_paused: bool,         // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,       // Do one step and stay paused.
    pub(super) tick_interval_ms: u64,   // Delay between steps while running.
    pub(super) last_step: Instant,      // When the previous step fired.
    pub(super) fill_rate: f64,          // Density used by the Randomize button.
    pub(super) texture: TextureHandle,  // Texture handle of the field.
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        Self {
            universe: Universe::new(Config::GRID_SIZE),
            is_paused: true,
            do_one_step: false,
            tick_interval_ms: Config::TICK_INTERVAL_MS,
            last_step: Instant::now(),
            fill_rate: Config::FILL_RATE,
            texture: ctx.load_texture(
                "life field",
                ColorImage::default(),
                TextureOptions::default(),
            ),
        }
    }

    /// Advance the universe when due. While running, at most one step per
    /// frame; each step reads the completed result of the previous one.
    /// Pausing takes effect between steps, never mid-computation.
    fn update_universe(&mut self) {
        if self.is_paused {
            if self.do_one_step {
                self.universe.step();
                self.do_one_step = false;
                self.last_step = Instant::now();
            }
            return;
        }
        if self.last_step.elapsed() >= Duration::from_millis(self.tick_interval_ms) {
            self.universe.step();
            self.last_step = Instant::now();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) && self.is_paused {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.handle_keys(ctx);
                self.draw(ui);
                self.update_universe();
            });

        if !self.is_paused {
            let interval = Duration::from_millis(self.tick_interval_ms);
            ctx.request_repaint_after(interval.saturating_sub(self.last_step.elapsed()));
        }
    }
}
