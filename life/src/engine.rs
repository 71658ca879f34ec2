// engine.rs - Double-buffered B3/S23 engine

use log::{debug, trace};

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::seed::SeedPolicy;

/// A cell whose state flipped during the last generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// B3/S23: survive on 2 or 3 neighbors, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Two equal grids that trade the readable and writable roles every
/// generation. The change log is reserved for every interior cell up front,
/// so nothing is allocated after construction.
#[derive(Debug)]
pub struct LifeEngine {
    buffers: [Grid; 2],
    read: usize,
    generation: u64,
    changes: Vec<CellChange>,
}

impl LifeEngine {
    /// Allocates both buffers, all dead.
    pub fn new(size: usize) -> Result<Self> {
        let buffers = [Grid::new(size)?, Grid::new(size)?];

        // At most every interior cell flips in one generation
        let interior = buffers[0].interior().len().pow(2);
        let mut changes = Vec::new();
        changes
            .try_reserve_exact(interior)
            .map_err(|_| LifeError::Allocation { cells: interior })?;

        debug!("allocated two {size}x{size} life buffers");
        Ok(Self {
            buffers,
            read: 0,
            generation: 0,
            changes,
        })
    }

    pub fn with_seed(size: usize, policy: SeedPolicy) -> Result<Self> {
        let mut engine = Self::new(size)?;
        engine.initialize(policy);
        Ok(engine)
    }

    /// Resets to generation 0: both buffers cleared, then the interior of the
    /// readable buffer filled according to `policy`.
    pub fn initialize(&mut self, policy: SeedPolicy) {
        self.reset();
        policy.fill(&mut self.buffers[self.read]);
        debug!(
            "seeded generation 0 with {:?}: {} alive",
            policy,
            self.current().population()
        );
    }

    /// Resets to generation 0 holding only `pattern`, centred.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.reset();
        let grid = &mut self.buffers[self.read];
        let origin = pattern.centred_origin(grid.size());
        let placed = pattern.stamp(grid, origin);
        debug!("placed {} at {:?} ({placed} cells)", pattern.name, origin);
    }

    pub fn size(&self) -> usize {
        self.buffers[0].size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last completed generation.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.read]
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.current().get(x, y)
    }

    /// Writes a cell of the current generation. Border cells are written to
    /// both buffers so they read the same whichever buffer is current.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.buffers[self.read].set(x, y, alive)?;
        if self.buffers[self.read].is_border(x, y) {
            self.buffers[self.read ^ 1].put(x, y, alive);
        }
        Ok(())
    }

    pub fn count_living_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.current().count_living_neighbors(x, y)
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Cells that flipped during the most recent `advance_generation`.
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Computes the next generation from the current one, then swaps roles.
    ///
    /// Every interior cell of the write buffer is overwritten, so nothing
    /// from two generations ago survives in it. Border cells are neither read
    /// as centres nor written.
    pub fn advance_generation(&mut self) {
        let [a, b] = &mut self.buffers;
        let (previous, next) = if self.read == 0 { (&*a, b) } else { (&*b, a) };
        let changes = &mut self.changes;
        changes.clear();

        for x in previous.interior() {
            for y in previous.interior() {
                let alive = previous.at(x, y);
                let state = next_state(alive, previous.neighbors_of(x, y));
                next.put(x, y, state);
                if state != alive {
                    changes.push(CellChange { x, y, alive: state });
                }
            }
        }

        self.read ^= 1;
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed",
            self.generation,
            self.changes.len()
        );
    }

    fn reset(&mut self) {
        for grid in &mut self.buffers {
            grid.clear();
        }
        self.read = 0;
        self.generation = 0;
        self.changes.clear();
    }
}
