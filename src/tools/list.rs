/// Operation for listing all habits with their streaks
///
/// This module implements the "list habits" menu entry.

use chrono::NaiveDate;
use serde::Serialize;
use crate::analytics::{AnalyticsEngine, HabitSummary};
use crate::domain::Registry;

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub total_habits: usize,
    /// Habits with a current streak of at least one day
    pub active_habits: usize,
}

/// List every habit with day count and streaks as of `today`
pub fn list_habits(
    analytics: &AnalyticsEngine,
    registry: &Registry,
    today: NaiveDate,
) -> ListHabitsResponse {
    let habits = analytics.summarize(registry, today);
    let active_habits = habits.iter().filter(|h| h.current_streak > 0).count();

    ListHabitsResponse {
        total_habits: habits.len(),
        active_habits,
        habits,
    }
}
