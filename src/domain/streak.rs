/// Streak calculation
///
/// This module defines the Streak struct that holds calculated streak
/// information for a habit, and the two algorithms behind it.

use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::DateSet;

/// Calculated streak information for a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streak {
    /// Consecutive days completed, ending today
    pub current_streak: u32,
    /// Longest run of consecutive days ever completed
    pub longest_streak: u32,
}

impl Streak {
    /// Calculate both streaks for a set of completion days
    pub fn calculate(dates: &DateSet, today: NaiveDate) -> Self {
        Self {
            current_streak: current_streak(dates, today),
            longest_streak: best_streak(dates),
        }
    }
}

/// Count consecutive completed days walking back from `today`
///
/// A missing `today` means the streak is 0, even if yesterday was done.
pub fn current_streak(dates: &DateSet, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut checking_date = today;

    while dates.contains(checking_date) {
        streak += 1;
        match checking_date.pred_opt() {
            Some(previous) => checking_date = previous,
            None => break,
        }
    }

    streak
}

/// Length of the longest run of consecutive days
pub fn best_streak(dates: &DateSet) -> u32 {
    let mut days = dates.iter();
    let Some(mut last_date) = days.next() else {
        return 0;
    };

    let mut longest_streak = 1;
    let mut current_streak = 1;

    for date in days {
        if last_date.succ_opt() == Some(date) {
            current_streak += 1;
        } else {
            // Streak broken, record if it's the longest
            longest_streak = longest_streak.max(current_streak);
            current_streak = 1;
        }
        last_date = date;
    }

    // Don't forget the last streak
    longest_streak.max(current_streak)
}
