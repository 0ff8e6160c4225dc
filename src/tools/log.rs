/// Operation for marking a habit complete
///
/// This module implements the "mark today done" menu entry. The habit is
/// picked by its 1-based position in the registry listing.

use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::{current_streak, HabitName, Registry};
use crate::tools::{SelectionError, ToolError};

/// Response from marking a habit
#[derive(Debug, Serialize)]
pub struct LogHabitResponse {
    pub name: String,
    pub completed_at: NaiveDate,
    /// False when the day was already marked
    pub newly_marked: bool,
    pub current_streak: u32,
    pub message: String,
}

/// Resolve a 1-based selection against the registry listing
pub fn select_habit(registry: &Registry, input: &str) -> Result<HabitName, SelectionError> {
    let names = registry.names();
    if names.is_empty() {
        return Err(SelectionError::NoHabits);
    }

    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    if index == 0 || index > names.len() {
        return Err(SelectionError::OutOfRange { index, count: names.len() });
    }

    Ok(names[index - 1].clone())
}

/// Mark the selected habit as completed on `completed_at`
///
/// An invalid selection leaves the registry unchanged.
pub fn log_habit(
    registry: &mut Registry,
    selection: &str,
    completed_at: NaiveDate,
) -> Result<LogHabitResponse, ToolError> {
    let name = select_habit(registry, selection)?;
    let newly_marked = registry.mark(name.as_str(), completed_at)?;
    let current_streak = current_streak(registry.get(name.as_str())?, completed_at);

    tracing::info!("Marked {} for {}", name, completed_at);

    Ok(LogHabitResponse {
        message: format!(
            "✅ Marked {} for {} (streak: {} day{})",
            name,
            completed_at,
            current_streak,
            if current_streak == 1 { "" } else { "s" }
        ),
        name: name.to_string(),
        completed_at,
        newly_marked,
        current_streak,
    })
}
