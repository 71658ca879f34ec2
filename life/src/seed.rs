// seed.rs - Generation-0 fill policies

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;

/// Chance that an interior cell starts alive.
pub const DEFAULT_DENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedPolicy {
    /// Every cell dead.
    Empty,
    /// Fresh OS-seeded randomness.
    Random { density: f64 },
    /// Reproducible soup from a fixed seed.
    Seeded { seed: u64, density: f64 },
}

impl SeedPolicy {
    pub fn random() -> Self {
        Self::Random { density: DEFAULT_DENSITY }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Seeded { seed, density: DEFAULT_DENSITY }
    }

    /// Fills the interior of `grid`; the border is left as it is.
    pub(crate) fn fill(&self, grid: &mut Grid) {
        match *self {
            Self::Empty => {}
            Self::Random { density } => fill_interior(grid, &mut thread_rng(), density),
            Self::Seeded { seed, density } => {
                fill_interior(grid, &mut ChaCha8Rng::seed_from_u64(seed), density)
            }
        }
    }
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::random()
    }
}

/// Probability usable by `gen_bool`: out-of-range values clamp, NaN falls
/// back to the default.
fn usable_density(density: f64) -> f64 {
    if density.is_nan() {
        DEFAULT_DENSITY
    } else {
        density.clamp(0.0, 1.0)
    }
}

fn fill_interior<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, density: f64) {
    let density = usable_density(density);
    for x in grid.interior() {
        for y in grid.interior() {
            grid.put(x, y, rng.gen_bool(density));
        }
    }
}
