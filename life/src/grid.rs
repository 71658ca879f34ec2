// grid.rs - Square boolean cell buffer with a fixed dead border

use std::ops::Range;

use crate::error::{LifeError, Result};

// Grid size configuration
pub const DEFAULT_GRID_SIZE: usize = 600;             // Side length used by the window host
pub const MIN_GRID_SIZE: usize = 3;                   // Smallest side with at least one interior cell
pub const GRID_START: usize = 1;                      // First interior coordinate on either axis

/// Moore neighborhood offsets, centre excluded.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// One N×N generation. Cells are stored x-major (`x * size + y`).
///
/// The outer ring (`0` and `size - 1` on each axis) is the border: it is
/// never touched by the simulation, so whatever the caller puts there stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates an all-dead grid. Fails if `size < MIN_GRID_SIZE` or if the
    /// buffer cannot be reserved.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(LifeError::GridTooSmall { size, min: MIN_GRID_SIZE });
        }
        let len = size
            .checked_mul(size)
            .ok_or(LifeError::Allocation { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::Allocation { cells: len })?;
        cells.resize(len, false);

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Interior coordinates on one axis: `1..size - 1`.
    pub fn interior(&self) -> Range<usize> {
        GRID_START..self.size - 1
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        let inner = self.interior();
        inner.contains(&x) && inner.contains(&y)
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && !self.is_interior(x, y)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.check(x, y)?;
        Ok(self.at(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.check(x, y)?;
        self.put(x, y, alive);
        Ok(())
    }

    /// Number of alive cells among the 8 Moore neighbors of an interior cell.
    /// The cell's own state is not counted. There is no wraparound, so border
    /// coordinates are rejected rather than folded onto the opposite edge.
    pub fn count_living_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        if !self.is_interior(x, y) {
            return Err(LifeError::IndexOutOfRange { x, y, size: self.size });
        }
        Ok(self.neighbors_of(x, y))
    }

    /// Alive cells in the whole grid, border included.
    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Alive coordinates in x-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(index, _)| (index / size, index % size))
    }

    fn check(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::IndexOutOfRange { x, y, size: self.size })
        }
    }

    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> bool {
        self.cells[x * self.size + y]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, alive: bool) {
        self.cells[x * self.size + y] = alive;
    }

    // Caller guarantees (x, y) is interior, so every offset stays in range.
    #[inline]
    pub(crate) fn neighbors_of(&self, x: usize, y: usize) -> u8 {
        NEIGHBORS
            .iter()
            .filter(|&&(dx, dy)| {
                self.at(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
            })
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_grids_without_interior() {
        assert_eq!(Grid::new(2), Err(LifeError::GridTooSmall { size: 2, min: 3 }));
        assert!(Grid::new(3).is_ok());
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.interior(), 1..9);
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut grid = Grid::new(5).unwrap();
        assert_eq!(grid.get(5, 0), Err(LifeError::IndexOutOfRange { x: 5, y: 0, size: 5 }));
        assert!(grid.set(0, 5, true).is_err());
        assert!(grid.get(4, 4).is_ok());
    }

    #[test]
    fn border_and_interior_partition_the_grid() {
        let grid = Grid::new(4).unwrap();
        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(3, 3));
        assert!(grid.is_interior(1, 2));
        assert!(!grid.is_border(4, 0));
    }

    #[test]
    fn neighbor_count_ignores_centre() {
        let mut grid = Grid::new(5).unwrap();
        for x in 1..4 {
            for y in 1..4 {
                grid.set(x, y, true).unwrap();
            }
        }
        assert_eq!(grid.count_living_neighbors(2, 2), Ok(8));
        grid.set(2, 2, false).unwrap();
        assert_eq!(grid.count_living_neighbors(2, 2), Ok(8));
        assert_eq!(grid.count_living_neighbors(1, 1), Ok(2));
    }

    #[test]
    fn neighbor_count_sees_the_border_but_does_not_wrap() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(4, 4, true).unwrap();
        assert_eq!(grid.count_living_neighbors(1, 1), Ok(1));
        assert_eq!(grid.count_living_neighbors(3, 3), Ok(1));
        assert_eq!(grid.count_living_neighbors(1, 3), Ok(0));
    }

    #[test]
    fn neighbor_count_rejects_border_cells() {
        let grid = Grid::new(5).unwrap();
        assert!(matches!(
            grid.count_living_neighbors(0, 2),
            Err(LifeError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn alive_cells_are_reported_x_major() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(2, 1, true).unwrap();
        grid.set(1, 3, true).unwrap();
        let cells: Vec<_> = grid.alive_cells().collect();
        assert_eq!(cells, vec![(1, 3), (2, 1)]);
    }

    #[test]
    fn population_counts_border_and_interior() {
        let mut grid = Grid::new(6).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(5, 2, true).unwrap();
        grid.set(3, 3, true).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.population(), grid.alive_cells().count());
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
