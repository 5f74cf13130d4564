//! Game of Life rules and the two-phase generation step

use super::Grid;
use log::trace;
use rayon::prelude::*;

/// Births and deaths produced by one generation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub births: usize,
    pub deaths: usize,
}

impl StepSummary {
    /// True when the step changed no cell
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live-neighbour count
    pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Indices of every cell whose state differs in the next generation.
    ///
    /// Only reads `current`, so every neighbour count observes the pre-step
    /// grid. The list comes back in index order.
    pub fn changes(current: &Grid) -> Vec<usize> {
        (0..current.cell_count())
            .into_par_iter()
            .filter(|&idx| {
                let (x, y) = current.position(idx);
                let alive = current.is_alive_at(idx);
                Self::next_state(alive, current.count_neighbors(x, y)) != alive
            })
            .collect()
    }

    /// Advance `grid` one generation in place: evaluate every cell, then
    /// commit the change-list.
    pub fn step(grid: &mut Grid) -> StepSummary {
        let changes = Self::changes(grid);

        let mut summary = StepSummary::default();
        for idx in changes {
            if grid.is_alive_at(idx) {
                summary.deaths += 1;
            } else {
                summary.births += 1;
            }
            grid.flip(idx);
        }

        trace!("Step committed {} births, {} deaths", summary.births, summary.deaths);
        summary
    }

    /// Evolve a copy of the grid for multiple generations
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut next = grid.clone();
        for _ in 0..generations {
            Self::step(&mut next);
        }
        next
    }

    /// Get neighbor counts that would result in birth (dead -> alive)
    pub fn birth_neighbor_counts() -> Vec<u8> {
        (0..=8).filter(|&n| Self::next_state(false, n)).collect()
    }

    /// Get neighbor counts that would result in survival (alive -> alive)
    pub fn survival_neighbor_counts() -> Vec<u8> {
        (0..=8).filter(|&n| Self::next_state(true, n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, coords: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        grid.seed(coords);
        grid
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(GameOfLifeRules::next_state(true, n), n == 2 || n == 3, "alive, {n}");
            assert_eq!(GameOfLifeRules::next_state(false, n), n == 3, "dead, {n}");
        }
    }

    #[test]
    fn test_neighbor_count_sets() {
        assert_eq!(GameOfLifeRules::birth_neighbor_counts(), vec![3]);
        assert_eq!(GameOfLifeRules::survival_neighbor_counts(), vec![2, 3]);
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_with(4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert!(GameOfLifeRules::changes(&grid).is_empty());

        let evolved = GameOfLifeRules::evolve_generations(&grid, 10);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);

        let mut evolved = grid.clone();
        let summary = GameOfLifeRules::step(&mut evolved);
        assert_eq!(summary, StepSummary { births: 2, deaths: 2 });
        assert_eq!(evolved, grid_with(5, &[(1, 2), (2, 2), (3, 2)]));

        GameOfLifeRules::step(&mut evolved);
        assert_eq!(evolved, grid);
    }

    #[test]
    fn test_step_is_synchronous() {
        // Four in a row: an in-place sweep in index order would bring (1, 2)
        // to life before (2, 1) is counted, keeping (2, 1) alive.
        let mut grid = grid_with(6, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        GameOfLifeRules::step(&mut grid);

        let expected = grid_with(
            6,
            &[(1, 2), (1, 3), (2, 2), (2, 3), (3, 2), (3, 3)],
        );
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_corner_block_is_stable() {
        let grid = grid_with(3, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let mut evolved = grid.clone();
        assert!(GameOfLifeRules::step(&mut evolved).is_stable());
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = grid_with(3, &[(0, 0)]);
        let summary = GameOfLifeRules::step(&mut grid);
        assert_eq!(summary.deaths, 1);
        assert!(grid.is_empty());
    }
}
