//! Simulation engine: a seeded grid plus its generation counter

use super::error::{LifeError, LifeResult};
use super::rules::{GameOfLifeRules, StepSummary};
use super::Grid;
use log::debug;
use serde::{Deserialize, Serialize};

/// Owns one grid, the seed it was built from, and the generation count.
///
/// The engine knows how to advance a single step and nothing more; run
/// limits, timing and display belong to whoever drives it.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    initial_state: Vec<(isize, isize)>,
    generation: u64,
    last_step: StepSummary,
}

/// Serializable view of an engine at one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub size: usize,
    pub live_cells: Vec<(usize, usize)>,
}

impl Engine {
    /// Build an engine of `size`×`size` cells seeded from `initial_state`
    pub fn new(size: usize, initial_state: &[(isize, isize)]) -> LifeResult<Self> {
        Self::builder().size(size).seed(initial_state).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Advance one generation
    pub fn advance(&mut self) {
        self.last_step = GameOfLifeRules::step(&mut self.grid);
        self.generation += 1;
        debug!(
            "Generation {}: +{} -{} ({} alive)",
            self.generation,
            self.last_step.births,
            self.last_step.deaths,
            self.grid.living_count()
        );
    }

    /// Return to generation 0 with the original seed
    pub fn reset(&mut self) {
        self.grid.clear();
        self.grid.seed(&self.initial_state);
        self.generation = 0;
        self.last_step = StepSummary::default();
        debug!("Engine reset to generation 0");
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// State of the cell at `(x, y)`
    pub fn cell_state(&self, x: usize, y: usize) -> LifeResult<bool> {
        self.grid.get(x, y)
    }

    pub fn living_count(&self) -> usize {
        self.grid.living_count()
    }

    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.grid.living_cells()
    }

    /// The seed coordinates as supplied, including any that were dropped
    pub fn initial_state(&self) -> &[(isize, isize)] {
        &self.initial_state
    }

    /// Births and deaths of the most recent advance
    pub fn last_step(&self) -> StepSummary {
        self.last_step
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            size: self.grid.size(),
            live_cells: self.grid.living_cells(),
        }
    }
}

/// Builder for [`Engine`]. Both the size and the seed must be supplied.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    size: Option<usize>,
    initial_state: Option<Vec<(isize, isize)>>,
}

impl EngineBuilder {
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Initial live cells. The coordinates are copied.
    pub fn seed(mut self, coords: &[(isize, isize)]) -> Self {
        self.initial_state = Some(coords.to_vec());
        self
    }

    pub fn build(self) -> LifeResult<Engine> {
        let size = self
            .size
            .ok_or_else(|| LifeError::InvalidArgument("grid size is required".to_string()))?;
        let initial_state = self.initial_state.ok_or_else(|| {
            LifeError::InvalidArgument("an initial state is required".to_string())
        })?;

        let mut grid = Grid::new(size)?;
        let dropped = grid.seed(&initial_state);
        debug!(
            "Built {}x{} engine with {} live cells ({} seeds dropped)",
            size,
            size,
            grid.living_count(),
            dropped
        );

        Ok(Engine {
            grid,
            initial_state,
            generation: 0,
            last_step: StepSummary::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: [(isize, isize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
    const BLINKER: [(isize, isize); 3] = [(5, 4), (5, 5), (5, 6)];

    fn live(engine: &Engine) -> Vec<(usize, usize)> {
        engine.living_cells()
    }

    #[test]
    fn test_empty_seed_all_dead() {
        for size in 1..=10 {
            let engine = Engine::new(size, &[]).unwrap();
            assert_eq!(engine.current_generation(), 0);
            assert_eq!(engine.grid_size(), size);
            for x in 0..size {
                for y in 0..size {
                    assert!(!engine.cell_state(x, y).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_missing_seed_rejected() {
        let result = Engine::builder().size(5).build();
        assert!(matches!(result, Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Engine::new(0, &[]), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let result = Engine::new(usize::MAX, &[(0, 0)]);
        assert!(matches!(result, Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_bounds_seed_ignored() {
        let engine = Engine::new(5, &[(5, 0)]).unwrap();
        assert_eq!(engine.living_count(), 0);
        assert_eq!(engine.initial_state(), &[(5, 0)]);
    }

    #[test]
    fn test_seed_is_copied() {
        let mut coords: Vec<(isize, isize)> = vec![(1, 1)];
        let engine = Engine::new(4, &coords).unwrap();
        coords.push((2, 2));
        assert_eq!(engine.initial_state(), &[(1, 1)]);
    }

    #[test]
    fn test_cell_state_bounds() {
        let engine = Engine::new(5, &[]).unwrap();
        assert_eq!(
            engine.cell_state(0, 5),
            Err(LifeError::OutOfBounds { x: 0, y: 5, size: 5 })
        );
    }

    #[test]
    fn test_block_still_life() {
        let mut engine = Engine::new(8, &BLOCK).unwrap();
        let before = live(&engine);
        for generation in 1..=20 {
            engine.advance();
            assert_eq!(engine.current_generation(), generation);
            assert_eq!(live(&engine), before);
        }
        assert!(engine.last_step().is_stable());
    }

    #[test]
    fn test_blinker_period_two() {
        let mut engine = Engine::new(10, &BLINKER).unwrap();
        let horizontal = live(&engine);

        engine.advance();
        assert_eq!(live(&engine), vec![(4, 5), (5, 5), (6, 5)]);

        engine.advance();
        assert_eq!(live(&engine), horizontal);
        assert_eq!(engine.current_generation(), 2);
    }

    #[test]
    fn test_reset_restores_seed() {
        let glider = [(4, 4), (6, 4), (5, 5), (6, 5), (5, 6)];
        for steps in [0, 1, 7, 30] {
            let mut engine = Engine::new(12, &glider).unwrap();
            let initial = live(&engine);
            for _ in 0..steps {
                engine.advance();
            }
            engine.reset();
            assert_eq!(engine.current_generation(), 0);
            assert_eq!(live(&engine), initial);
            assert_eq!(engine.last_step(), StepSummary::default());
        }
    }

    #[test]
    fn test_snapshot() {
        let mut engine = Engine::new(10, &BLINKER).unwrap();
        engine.advance();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.size, 10);
        assert_eq!(snapshot.live_cells, vec![(4, 5), (5, 5), (6, 5)]);
    }
}
