//! Errors raised by the simulation core

use thiserror::Error;

/// Failures of the grid and engine API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Construction with a missing seed or a zero grid size
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Cell access outside `[0, size)` on either axis
    #[error("coordinates ({x}, {y}) out of bounds for {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
