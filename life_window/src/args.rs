// args.rs - Command line options for the window host

use clap::Parser;
use life::{SeedPolicy, DEFAULT_GRID_SIZE};

use crate::palette::Palette;

// Accepted window side in logical pixels
const MIN_WINDOW: f32 = 64.0;
const MAX_WINDOW: f32 = 16384.0;

/// Conway's Game of Life on a bounded grid with a dead border.
///
/// Space pauses, N steps once while paused, R reseeds.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Cells per side, border included
    #[arg(short = 's', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Window side length in logical pixels
    #[arg(short = 'w', long, default_value_t = 800.0, value_parser = parse_window_side)]
    pub window: f32,

    /// Window title
    #[arg(short = 't', long, default_value = "life")]
    pub title: String,

    /// Seed for a reproducible starting soup
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of random soup
    #[arg(short = 'p', long, conflicts_with = "seed")]
    pub pattern: Option<String>,

    /// Tint dead cells by how many living neighbors they have
    #[arg(long)]
    pub neighbor_colors: bool,

    /// Open the window paused
    #[arg(long)]
    pub paused: bool,
}

impl Args {
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed.map_or_else(SeedPolicy::random, SeedPolicy::seeded)
    }

    pub fn palette(&self) -> Palette {
        let palette = Palette::default();
        if self.neighbor_colors {
            palette.with_neighbor_tints()
        } else {
            palette
        }
    }
}

fn parse_window_side(value: &str) -> Result<f32, String> {
    let side: f32 = value
        .parse()
        .map_err(|err| format!("{value:?} is not a number: {err}"))?;
    if (MIN_WINDOW..=MAX_WINDOW).contains(&side) {
        Ok(side)
    } else {
        Err(format!("window side must be between {MIN_WINDOW} and {MAX_WINDOW} pixels"))
    }
}
