//! Drivers that run an engine over time

pub mod runner;

pub use runner::{RunOptions, RunSummary, Runner};
