/// Core types used throughout the domain layer
///
/// This module defines HabitName, the key every habit is stored under.

use std::fmt;
use serde::Serialize;
use crate::domain::DomainError;

/// Normalized name of a habit
///
/// This is a wrapper around String to provide type safety - a raw user string
/// can't be used as a registry key until it has been trimmed and normalized.
/// Normalization only uppercases the first character, so "read" and "Read"
/// are the same habit but "READ" is a different one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HabitName(String);

impl HabitName {
    /// Trim and normalize a raw name
    ///
    /// Fails if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        Ok(Self(capitalize_first(trimmed)))
    }

    /// The normalized name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase the first character, leave the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
