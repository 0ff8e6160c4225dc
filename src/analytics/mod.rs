/// Analytics engine for summaries and the completion heatmap
///
/// This module turns the registry into display data: one summary row per
/// habit with its streaks, and a fixed-length window of done/missed days.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use crate::domain::{Registry, Streak};

/// Number of days shown by the heatmap in the menu
pub const DEFAULT_HEATMAP_WINDOW: u32 = 7;

/// Streak statistics for one habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub name: String,
    /// Number of distinct days the habit was completed
    pub total_days: usize,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_completed: Option<NaiveDate>,
}

/// Done/missed flags for one habit over the heatmap window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub name: String,
    /// One flag per day, oldest first, today last
    pub days: Vec<bool>,
}

/// Completion flags for every habit over the most recent days
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// The days covered, oldest first
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<HeatmapRow>,
}

/// Analytics engine for processing habit data
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Summarize every habit in registry order
    pub fn summarize(&self, registry: &Registry, today: NaiveDate) -> Vec<HabitSummary> {
        registry.all().map(|(name, dates)| {
            let streak = Streak::calculate(dates, today);
            HabitSummary {
                name: name.to_string(),
                total_days: dates.len(),
                current_streak: streak.current_streak,
                best_streak: streak.longest_streak,
                last_completed: dates.last(),
            }
        }).collect()
    }

    /// Build the heatmap for the `window` days ending at `today`
    pub fn heatmap(&self, registry: &Registry, today: NaiveDate, window: u32) -> Heatmap {
        heatmap(registry, today, window)
    }
}

/// Project the registry onto the `window` days ending at `today` inclusive
///
/// A zero window yields rows with no days; an empty registry yields no rows.
/// Days before the earliest representable date are left out of the window.
pub fn heatmap(registry: &Registry, today: NaiveDate, window: u32) -> Heatmap {
    let dates: Vec<NaiveDate> = (0..window)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .collect();

    let rows = registry.all().map(|(name, completed)| HeatmapRow {
        name: name.to_string(),
        days: dates.iter().map(|date| completed.contains(*date)).collect(),
    }).collect();

    Heatmap { dates, rows }
}
