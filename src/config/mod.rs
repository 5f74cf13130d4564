//! Configuration management for the Game of Life driver

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputStyle, SeedConfig, Settings, SimulationConfig};
