// ui.rs - Presents the projected frame and handles the few host keys

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Rect, Sense, TextureOptions, Vec2};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (pause, step, reseed) = ctx.input(|i| {
            (
                i.key_pressed(Key::Space),
                i.key_pressed(Key::N),
                i.key_pressed(Key::R),
            )
        });

        if pause {
            self.toggle_running();
        }
        if reseed {
            self.reseed();
        }
        // One generation per frame while running
        if self.is_running || step {
            self.step();
        }

        if self.frame_dirty {
            let image = self.renderer.frame().clone();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("life-grid", image, TextureOptions::NEAREST))
                }
            }
            self.frame_dirty = false;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.renderer.palette().dead))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) = ui.allocate_painter(available, Sense::hover());

                // Keep cells square: scale the N×N image to the shorter side
                let side = available.x.min(available.y);
                let rect = Rect::from_center_size(response.rect.center(), Vec2::splat(side));

                if let Some(texture) = &self.texture {
                    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), rect, uv, Color32::WHITE);
                }

                painter.text(
                    response.rect.left_top() + Vec2::splat(4.0),
                    Align2::LEFT_TOP,
                    self.status_line(),
                    FontId::monospace(14.0),
                    Color32::YELLOW,
                );
            });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
