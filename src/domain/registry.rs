/// Registry of all tracked habits
///
/// This module defines the Registry, the in-memory mapping from habit name
/// to the days it was completed. Storage fills it at startup, the menu
/// mutates it, and analytics reads from it.

use std::collections::BTreeMap;
use chrono::NaiveDate;
use crate::domain::{DateSet, DomainError, HabitName};

/// All habits and their completion days
///
/// Habits are kept sorted by name, so enumeration order is stable for the
/// whole run and the 1-based selection numbers shown in the menu stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    habits: BTreeMap<HabitName, DateSet>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a habit exists
    ///
    /// The name is normalized first. Registering an existing habit is a
    /// no-op and keeps its dates.
    pub fn register(&mut self, raw_name: &str) -> Result<HabitName, DomainError> {
        let name = HabitName::parse(raw_name)?;

        if !self.habits.contains_key(&name) {
            tracing::debug!("Registered habit: {}", name);
            self.habits.insert(name.clone(), DateSet::new());
        }

        Ok(name)
    }

    /// Look up the dates recorded for a habit
    pub fn get(&self, raw_name: &str) -> Result<&DateSet, DomainError> {
        let name = HabitName::parse(raw_name)?;

        self.habits
            .get(&name)
            .ok_or_else(|| DomainError::HabitNotFound { name: name.to_string() })
    }

    /// Record a completion day for an existing habit
    ///
    /// Returns false if the day was already recorded.
    pub fn mark(&mut self, raw_name: &str, date: NaiveDate) -> Result<bool, DomainError> {
        let name = HabitName::parse(raw_name)?;

        let dates = self.habits
            .get_mut(&name)
            .ok_or_else(|| DomainError::HabitNotFound { name: name.to_string() })?;

        Ok(dates.add(date))
    }

    /// Register a habit if needed and record a day for it
    ///
    /// Used by storage while importing.
    pub fn record(&mut self, raw_name: &str, date: NaiveDate) -> Result<HabitName, DomainError> {
        let name = self.register(raw_name)?;
        if let Some(dates) = self.habits.get_mut(&name) {
            dates.add(date);
        }
        Ok(name)
    }

    /// Every habit with its dates, in name order
    pub fn all(&self) -> impl Iterator<Item = (&HabitName, &DateSet)> + '_ {
        self.habits.iter()
    }

    /// Habit names in the same order as `all`
    pub fn names(&self) -> Vec<HabitName> {
        self.habits.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
