//! Conway's Game of Life on a bounded square grid.
//!
//! The grid does not wrap. Its outer ring is a fixed border that the
//! simulation never writes, so only cells in `1..size - 1` on both axes
//! follow the B3/S23 rule. [`LifeEngine`] keeps two buffers and swaps their
//! roles after every generation.

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod seed;

pub use engine::{next_state, CellChange, LifeEngine};
pub use error::{LifeError, Result};
pub use grid::{Grid, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
pub use patterns::{Pattern, PATTERNS};
pub use seed::{SeedPolicy, DEFAULT_DENSITY};
