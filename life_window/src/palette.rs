// palette.rs - Display colors, fixed for the lifetime of a renderer

use egui::Color32;

pub const ALIVE_COLOR: Color32 = Color32::WHITE;
pub const DEAD_COLOR: Color32 = Color32::BLACK;

// Tints for dead cells by living-neighbor count (debug view only)
pub const ONE_NEIGHBOR_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
pub const TWO_NEIGHBORS_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
pub const THREE_NEIGHBORS_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    /// When set, dead cells with 1, 2 or 3 living neighbors take these colors.
    pub neighbor_tints: Option<[Color32; 3]>,
}

impl Palette {
    pub fn with_neighbor_tints(mut self) -> Self {
        self.neighbor_tints = Some([
            ONE_NEIGHBOR_COLOR,
            TWO_NEIGHBORS_COLOR,
            THREE_NEIGHBORS_COLOR,
        ]);
        self
    }

    /// Color of a cell given its state and, for the tinted view, its
    /// living-neighbor count.
    pub fn color(&self, alive: bool, neighbors: Option<u8>) -> Color32 {
        if alive {
            return self.alive;
        }
        match (self.neighbor_tints, neighbors) {
            (Some(tints), Some(n @ 1..=3)) => tints[usize::from(n) - 1],
            _ => self.dead,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: ALIVE_COLOR,
            dead: DEAD_COLOR,
            neighbor_tints: None,
        }
    }
}
