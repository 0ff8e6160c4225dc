/// Storage layer for persisting habit data
///
/// This module handles reading and writing the registry. The only backend
/// is a flat text file with one `habit,date` record per line.

pub mod flat_file;

// Re-export the main storage types
pub use flat_file::*;

use std::path::PathBuf;
use thiserror::Error;
use crate::domain::Registry;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not load data: invalid date '{value}' on line {line}: {source}")]
    Load {
        line: usize,
        value: String,
        #[source]
        source: DateError,
    },

    #[error("Could not save to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a date field could not be read
#[derive(Error, Debug)]
pub enum DateError {
    #[error("expected YYYY-MM-DD")]
    NotIsoDate,

    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}

/// Trait defining the storage interface for habits
///
/// This trait keeps the tracker independent of the file format.
pub trait HabitStorage {
    /// Load records into `registry`
    ///
    /// Returns the number of records applied. On error the registry keeps
    /// whatever was loaded before the failing record.
    fn load_into(&self, registry: &mut Registry) -> Result<usize, StorageError>;

    /// Replace the stored data with the contents of `registry`
    fn save(&self, registry: &Registry) -> Result<(), StorageError>;
}
