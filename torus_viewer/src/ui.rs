// ui.rs - egui front end for the toroidal simulation
//
// Keys: Space pause, C clear, R randomize, D draw, E erase, Up/Down speed,
// S default speed, P toggle auto-pan, Esc/Q quit.

use std::time::Instant;

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Rect, Vec2};
use torus_life::{patterns, Simulation, TickOutcome};

use crate::view::{screen_to_cell, tile_range, AutoPan, CELL_SIZE};

const BG_COLOR: Color32 = Color32::from_rgb(24, 24, 32);
const LIVE_COLOR: Color32 = Color32::from_rgb(64, 200, 128);
const TEXT_COLOR: Color32 = Color32::from_gray(200);

pub struct LifeApp {
    sim: Simulation,
    pan: AutoPan,
    draw_mode: bool, // false = erase
    last_frame: Instant,
    selected_pattern: usize,
    last_reseed: Option<TickOutcome>,
}

impl LifeApp {
    pub fn new(sim: Simulation) -> Self {
        let pan = AutoPan::new(sim.grid().width(), sim.grid().height());
        Self {
            sim,
            pan,
            draw_mode: true,
            last_frame: Instant::now(),
            selected_pattern: 0,
            last_reseed: None,
        }
    }

    /// Returns true when the user asked to quit.
    fn handle_keys(&mut self, ctx: &egui::Context) -> bool {
        let mut quit = false;
        ctx.input(|i| {
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::Q) {
                quit = true;
            }
            if i.key_pressed(Key::Space) {
                self.sim.toggle_pause();
            }
            if i.key_pressed(Key::C) {
                self.sim.clear();
            }
            if i.key_pressed(Key::R) {
                self.sim.randomize();
            }
            if i.key_pressed(Key::D) {
                self.draw_mode = true;
            }
            if i.key_pressed(Key::E) {
                self.draw_mode = false;
            }
            if i.key_pressed(Key::ArrowUp) {
                self.sim.faster();
            }
            if i.key_pressed(Key::ArrowDown) {
                self.sim.slower();
            }
            if i.key_pressed(Key::S) {
                self.sim.reset_speed();
            }
            if i.key_pressed(Key::P) {
                self.pan.toggle();
            }
        });
        quit
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.sim.is_paused() { "▶ Start" } else { "⏸ Pause" };
            if ui.button(button_text).clicked() {
                self.sim.toggle_pause();
            }
            if ui.button("⏹ Clear").clicked() {
                self.sim.clear();
            }
            if ui.button("🎲 Random").clicked() {
                self.sim.randomize();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                self.sim.set_paused(true);
                self.sim.load_pattern(&patterns::PATTERNS[self.selected_pattern]);
            }

            ui.separator();

            ui.label("Step:");
            let (min, max) = self.sim.interval_bounds();
            let mut ms = self.sim.interval().as_millis() as u64;
            let range = min.as_millis() as u64..=max.as_millis() as u64;
            if ui.add(egui::Slider::new(&mut ms, range).suffix(" ms")).changed() {
                self.sim.set_interval(std::time::Duration::from_millis(ms));
            }
        });
    }

    fn status_line(&self) -> String {
        let mut line = format!(
            "gen {}  pop {}  step {} ms  {}  {}",
            self.sim.generation(),
            self.sim.grid().population(),
            self.sim.interval().as_millis(),
            if self.sim.is_paused() { "paused" } else { "running" },
            if self.draw_mode { "draw" } else { "erase" },
        );
        match self.last_reseed {
            Some(TickOutcome::Extinct) => line.push_str("  (reseeded: died out)"),
            Some(TickOutcome::LoopDetected) => line.push_str("  (reseeded: loop)"),
            _ => {}
        }
        line
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        if self.handle_keys(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.pan.advance(dt);

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BG_COLOR))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let view = response.rect;
                let (grid_w, grid_h) = (self.sim.grid().width(), self.sim.grid().height());

                // Mouse painting: right button always erases.
                let painting = response.is_pointer_button_down_on();
                if painting {
                    let (pos, erase_button) =
                        ui.input(|i| (i.pointer.interact_pos(), i.pointer.secondary_down()));
                    if let Some(pos) = pos {
                        let (gx, gy) = screen_to_cell(
                            pos.x - view.min.x,
                            pos.y - view.min.y,
                            self.pan.x,
                            self.pan.y,
                            grid_w,
                            grid_h,
                        );
                        let erase = erase_button || !self.draw_mode;
                        self.sim.paint(gx, gy, !erase);
                    }
                }

                // No steps while a button is held.
                if !painting {
                    match self.sim.advance(dt) {
                        Some(TickOutcome::Advanced) | None => {}
                        Some(outcome) => self.last_reseed = Some(outcome),
                    }
                }

                // Tiled rendering: repeat the universe to fill the viewport.
                let (univ_w, univ_h) = self.pan.universe_size();
                let cell = Vec2::splat(CELL_SIZE - 1.0);
                for ty in tile_range(self.pan.y, view.height(), univ_h) {
                    for tx in tile_range(self.pan.x, view.width(), univ_w) {
                        let base_x = view.min.x + tx as f32 * univ_w - self.pan.x;
                        let base_y = view.min.y + ty as f32 * univ_h - self.pan.y;
                        for (x, y) in self.sim.grid().live_cells() {
                            let min = egui::pos2(
                                base_x + x as f32 * CELL_SIZE + 1.0,
                                base_y + y as f32 * CELL_SIZE + 1.0,
                            );
                            let rect = Rect::from_min_size(min, cell);
                            if view.intersects(rect) {
                                painter.rect_filled(rect, 0.0, LIVE_COLOR);
                            }
                        }
                    }
                }

                painter.text(
                    view.min + Vec2::splat(6.0),
                    Align2::LEFT_TOP,
                    self.status_line(),
                    FontId::monospace(13.0),
                    TEXT_COLOR,
                );
            });

        // Keep the pan and the simulation moving.
        ctx.request_repaint();
    }
}
