/// User-facing habit operations
///
/// This module contains the operations the menu offers. Each one takes
/// the registry plus its parameters and returns a serializable response,
/// so the menu only has to render.

pub mod create;
pub mod log;
pub mod list;
pub mod heatmap;

// Re-export tool functions for easy access
pub use create::*;
pub use log::*;
pub use list::*;
pub use heatmap::*;

use thiserror::Error;
use crate::domain::DomainError;

/// Invalid habit selection when picking from the numbered list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid selection '{0}': expected a number")]
    NotANumber(String),

    #[error("Invalid selection {index}: choose between 1 and {count}")]
    OutOfRange { index: usize, count: usize },

    #[error("No habits yet.")]
    NoHabits,
}

/// Errors returned by the habit operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
