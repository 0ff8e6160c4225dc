/// Domain module containing core data types and streak logic
///
/// This module defines the core entities (HabitName, DateSet, Registry,
/// Streak) and their validation rules.

pub mod types;
pub mod dates;
pub mod registry;
pub mod streak;

// Re-export public types for easy access
pub use types::*;
pub use dates::*;
pub use registry::*;
pub use streak::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Habit not found: {name}")]
    HabitNotFound { name: String },
}
