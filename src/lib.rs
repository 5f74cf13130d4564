//! Conway's Game of Life
//!
//! A bounded, square Game of Life engine plus the configuration, rendering
//! and timed-loop glue used by the `conway_life` binary.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Engine, LifeError, Pattern};
pub use simulation::{RunSummary, Runner};

use anyhow::Result;

/// Run the simulation described by `settings`, printing to stdout
pub fn run_simulation(settings: &Settings) -> Result<RunSummary> {
    let mut runner = Runner::from_settings(settings)?;
    runner.run(&mut std::io::stdout().lock())
}
