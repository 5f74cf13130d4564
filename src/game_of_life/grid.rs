//! Grid representation and utilities for Game of Life

use super::error::{LifeError, LifeResult};
use itertools::iproduct;
use log::debug;

/// Offsets of the eight Moore neighbours
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A square, bounded Game of Life grid.
///
/// Cells live in one flat vector addressed by `index(x, y) = x * size + y`.
/// Anything outside `[0, size)` on either axis is treated as dead and never
/// wraps to the opposite edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(size: usize) -> LifeResult<Self> {
        if size == 0 {
            return Err(LifeError::InvalidArgument(
                "grid size must be greater than 0".to_string(),
            ));
        }
        let cell_count = size.checked_mul(size).ok_or_else(|| {
            LifeError::InvalidArgument(format!("grid size {} overflows the cell count", size))
        })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count).map_err(|_| {
            LifeError::InvalidArgument(format!("cannot allocate a {}x{} grid", size, size))
        })?;
        cells.resize(cell_count, false);

        Ok(Self { size, cells })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Convert a 1D index back to its coordinates
    #[inline]
    pub(crate) fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// True when `(x, y)` lies on the grid
    pub fn contains(&self, x: isize, y: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    fn check_bounds(&self, x: usize, y: usize) -> LifeResult<()> {
        if x < self.size && y < self.size {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds { x, y, size: self.size })
        }
    }

    /// Get cell value at coordinates
    pub fn get(&self, x: usize, y: usize) -> LifeResult<bool> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> LifeResult<()> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// State of the cell at a flat index
    #[inline]
    pub(crate) fn is_alive_at(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Invert the cell at a flat index
    #[inline]
    pub(crate) fn flip(&mut self, index: usize) {
        self.cells[index] = !self.cells[index];
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Mark every in-bounds coordinate alive.
    ///
    /// Coordinates off the grid are skipped rather than reported. Returns the
    /// number of coordinates that were dropped.
    pub fn seed(&mut self, coords: &[(isize, isize)]) -> usize {
        let mut dropped = 0;
        for &(x, y) in coords {
            if self.contains(x, y) {
                let idx = self.index(x as usize, y as usize);
                self.cells[idx] = true;
            } else {
                debug!("Skipping seed ({}, {}) outside {}x{} grid", x, y, self.size, self.size);
                dropped += 1;
            }
        }
        dropped
    }

    /// Count living neighbors for a cell
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if self.contains(nx, ny) && self.cells[self.index(nx as usize, ny as usize)] {
                count += 1;
            }
        }

        count
    }

    /// Get all living cell coordinates, in index order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(x, y)| self.cells[self.index(x, y)])
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_grid(size: usize) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for (x, y) in iproduct!(0..size, 0..size) {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let half_width = 1usize << (usize::BITS / 2);
        for size in [usize::MAX, half_width] {
            assert!(matches!(Grid::new(size), Err(LifeError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_fresh_grids_are_dead() {
        for size in 1..=12 {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.cell_count(), size * size);
            assert_eq!(grid.living_count(), 0);
        }
    }

    #[test]
    fn test_index_layout() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 3), 3);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(3, 3), 15);
        assert_eq!(grid.position(6), (1, 2));
    }

    #[test]
    fn test_strict_bounds() {
        let mut grid = Grid::new(5).unwrap();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(4, 4));
        assert!(!grid.contains(5, 0));
        assert!(!grid.contains(0, 5));
        assert!(!grid.contains(-1, 2));

        assert_eq!(
            grid.get(5, 0),
            Err(LifeError::OutOfBounds { x: 5, y: 0, size: 5 })
        );
        assert!(grid.set(0, 5, true).is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(1, 2, true).unwrap();
        assert!(grid.get(1, 2).unwrap());
        assert!(!grid.get(2, 1).unwrap());
        grid.set(1, 2, false).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_seed_drops_out_of_bounds() {
        let mut grid = Grid::new(5).unwrap();
        let dropped = grid.seed(&[(5, 0), (0, 5), (-1, 3), (2, 2)]);
        assert_eq!(dropped, 3);
        assert_eq!(grid.living_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let coords = [(1, 1), (1, 2), (3, 0)];
        let mut once = Grid::new(4).unwrap();
        once.seed(&coords);
        let mut twice = Grid::new(4).unwrap();
        twice.seed(&coords);
        twice.seed(&coords);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_neighbor_counting() {
        let mut grid = full_grid(3);
        grid.set(1, 1, false).unwrap();

        // Center cell should have 8 neighbors
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner sees the two edge cells next to it; the center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
    }

    #[test]
    fn test_edge_and_corner_limits() {
        let grid = full_grid(4);
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(3, 3), 3);
        assert_eq!(grid.count_neighbors(0, 3), 3);
        assert_eq!(grid.count_neighbors(0, 1), 5);
        assert_eq!(grid.count_neighbors(2, 3), 5);
        assert_eq!(grid.count_neighbors(1, 2), 8);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Grid::new(5).unwrap();
        grid.seed(&[(4, 4), (4, 0), (0, 4)]);
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }
}
