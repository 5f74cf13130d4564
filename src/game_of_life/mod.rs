//! Game of Life core functionality

pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use engine::{Engine, EngineBuilder, Snapshot};
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use io::{create_example_seeds, load_seed_from_file, save_seed_to_file};
pub use patterns::Pattern;
pub use rules::{GameOfLifeRules, StepSummary};
