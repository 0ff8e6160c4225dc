/// Public library interface for the habit tracker
///
/// This module exports the tracker itself and the public types that the
/// binary and the tests build on.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
pub mod tools;
pub mod menu;

// Re-export public modules and types
pub use domain::*;
pub use storage::{parse_records, write_records, DateError, FlatFileStorage, HabitStorage, StorageError, DEFAULT_FILE_NAME};
pub use analytics::{heatmap, AnalyticsEngine, HabitSummary, Heatmap, HeatmapRow, DEFAULT_HEATMAP_WINDOW};
pub use menu::Menu;

/// Errors that can occur while running the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Storage(#[from] storage::StorageError),

    #[error(transparent)]
    Tool(#[from] tools::ToolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the tracker knows as of its reference date
#[derive(Debug, Serialize)]
pub struct Report {
    pub today: NaiveDate,
    pub habits: tools::ListHabitsResponse,
    pub heatmap: Heatmap,
}

/// The habit tracker: an owned registry plus where it is persisted
///
/// The reference date used for marking and for streaks is the local date
/// at the moment of each operation, unless pinned with `with_today`.
pub struct HabitTracker<S = FlatFileStorage> {
    registry: Registry,
    storage: S,
    analytics: AnalyticsEngine,
    pinned_today: Option<NaiveDate>,
}

impl<S: HabitStorage> HabitTracker<S> {
    /// Create a tracker with an empty registry
    ///
    /// Call `load` to read existing data.
    pub fn new(storage: S) -> Self {
        Self {
            registry: Registry::new(),
            storage,
            analytics: AnalyticsEngine::new(),
            pinned_today: None,
        }
    }

    /// Use a fixed reference date instead of the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    /// Read stored habits into the registry
    ///
    /// On a load error the records read before the failure are kept and
    /// the tracker stays usable.
    pub fn load(&mut self) -> Result<usize, TrackerError> {
        let applied = self.storage.load_into(&mut self.registry).map_err(|e| {
            tracing::warn!("Load stopped early, keeping {} habits: {}", self.registry.len(), e);
            e
        })?;
        Ok(applied)
    }

    /// Write the registry back to storage
    pub fn save(&self) -> Result<(), TrackerError> {
        self.storage.save(&self.registry)?;
        Ok(())
    }

    /// Habit summaries and the weekly heatmap as of `today`
    pub fn report(&self) -> Report {
        let today = self.today();
        Report {
            today,
            habits: tools::list_habits(&self.analytics, &self.registry, today),
            heatmap: tools::weekly_heatmap(&self.analytics, &self.registry, today),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The pinned date, or the current local date
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }
}
