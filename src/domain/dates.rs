/// Completion date set for a single habit
///
/// Each habit keeps the calendar days on which it was completed. A day is
/// either done or not, so the collection has set semantics.

use std::collections::BTreeSet;
use chrono::NaiveDate;
use serde::Serialize;

/// The set of days a habit was completed
///
/// Dates can be added in any order. Iteration is always ascending, which is
/// what the streak calculations and the file writer rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateSet {
    dates: BTreeSet<NaiveDate>,
}

impl DateSet {
    /// Create an empty date set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completion day
    ///
    /// Returns false if the day was already recorded.
    pub fn add(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Check whether the habit was completed on a given day
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Most recent completion day, if any
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Iterate over the completion days in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for DateSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self { dates: iter.into_iter().collect() }
    }
}
