use super::{App, Config};
use crate::Pattern;
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, Image, RichText, Sense, Slider, Stroke, TextureFilter,
    TextureOptions, TextureWrapMode, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
            ui.label(Self::new_text("(or Space; E toggles pause)"))
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Tick interval (ms): "));
            ui.add(Slider::new(
                &mut self.tick_interval_ms,
                Config::MIN_TICK_INTERVAL_MS..=Config::MAX_TICK_INTERVAL_MS,
            ));
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.universe.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.universe.grid().population()
        )));
    }

    // Seeding is only meaningful on a paused universe; the engine itself
    // does not enforce this, the controls do.
    fn draw_seed_controls(&mut self, ui: &mut Ui) {
        ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Clear")).clicked() {
                    self.universe.clear();
                }
                if ui.add(Self::new_button("Randomize")).clicked() {
                    self.universe.randomize(None, self.fill_rate);
                }
            });

            ui.horizontal(|ui| {
                ui.label(Self::new_text("Fill rate: "));
                ui.add(Slider::new(&mut self.fill_rate, 0.05..=0.95));
            });

            ui.horizontal(|ui| {
                for pattern in [Pattern::Glider, Pattern::Pulsar] {
                    if ui.add(Self::new_button(pattern.name())).clicked() {
                        self.universe.stamp(pattern);
                    }
                }
            })
            .response
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui);
                });
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_seed_controls(ui);
                });
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let n = self.universe.size();
        let gray = self
            .universe
            .grid()
            .cells()
            .iter()
            .map(|&alive| {
                if alive {
                    Config::ALIVE_GRAY
                } else {
                    Config::DEAD_GRAY
                }
            })
            .collect::<Vec<_>>();

        let ci = ColorImage::from_gray([n; 2], &gray);
        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
            ..Default::default()
        };
        self.texture.set(ci, texture_options);

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));

        // Click-to-toggle, paused only.
        if response.clicked() && self.is_paused {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = (pos - response.rect.left_top()) / response.rect.size();
                let x = ((p.x * n as f32) as usize).min(n - 1);
                let y = ((p.y * n as f32) as usize).min(n - 1);
                self.universe.toggle(x, y);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
