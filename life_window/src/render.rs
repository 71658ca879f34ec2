// render.rs - Projects the readable grid onto an RGBA image

use egui::ColorImage;
use life::{CellChange, Grid};

use crate::palette::Palette;

/// Holds the last projected frame. Pixel `(x, y)` shows cell `(x, y)`.
pub struct FrameRenderer {
    palette: Palette,
    image: ColorImage,
}

impl FrameRenderer {
    pub fn new(size: usize, palette: Palette) -> Self {
        Self {
            palette,
            image: ColorImage::new([size, size], palette.dead),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn frame(&self) -> &ColorImage {
        &self.image
    }

    /// Neighbor tints depend on cells around a flip, so a delta is not enough.
    pub fn needs_full_projection(&self) -> bool {
        self.palette.neighbor_tints.is_some()
    }

    /// Redraws every pixel from `grid`.
    pub fn project(&mut self, grid: &Grid) -> &ColorImage {
        let size = grid.size();
        debug_assert_eq!(self.image.size, [size, size]);
        let tinted = self.needs_full_projection();

        for x in 0..size {
            for y in 0..size {
                let alive = grid.get(x, y).unwrap_or(false);
                let neighbors = if tinted {
                    grid.count_living_neighbors(x, y).ok()
                } else {
                    None
                };
                self.image.pixels[y * size + x] = self.palette.color(alive, neighbors);
            }
        }
        &self.image
    }

    /// Patches only the cells that flipped in the last generation.
    pub fn apply_delta(&mut self, changes: &[CellChange]) -> &ColorImage {
        let width = self.image.size[0];
        for change in changes {
            self.image.pixels[change.y * width + change.x] = self.palette.color(change.alive, None);
        }
        &self.image
    }
}
