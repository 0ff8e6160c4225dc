/// Flat-file implementation of the habit storage interface
///
/// Each line of the file is one record:
///
/// ```text
/// Read,2025-11-12
/// Read,2025-11-13
/// Stretch,
/// ```
///
/// A habit with N completion days appears on N lines. A habit with no days
/// is written once with an empty date field so that it survives a
/// save/load cycle. There is no header and no escaping, so a comma inside a
/// habit name ends up in the date field on the next load.

use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::domain::Registry;
use crate::storage::{DateError, HabitStorage, StorageError};

/// File name used when no path is given, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "habits.csv";

/// ISO-8601 calendar date
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage backed by a single text file
#[derive(Debug, Clone)]
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    /// Create a storage for the given file path
    ///
    /// Nothing is touched on disk until `load_into` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file a save replaces; a symlinked path is followed to its target
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn save_error(&self, source: io::Error) -> StorageError {
        StorageError::Save { path: self.path.clone(), source }
    }

    /// Atomically replace the target with whatever `fill` writes
    ///
    /// The new contents go to a temporary file next to the target, which
    /// is renamed over it only once everything has been written and synced.
    /// The replaced file keeps its permissions.
    fn replace_contents<F>(&self, fill: F) -> Result<usize, StorageError>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> io::Result<usize>,
    {
        let target = self.target();
        let mut temp = NamedTempFile::new_in(parent_dir(&target))
            .map_err(|e| self.save_error(e))?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.save_error(e))?;
        }

        let written = {
            let mut writer = BufWriter::new(temp.as_file_mut());
            let written = fill(&mut writer).map_err(|e| self.save_error(e))?;
            writer.flush().map_err(|e| self.save_error(e))?;
            written
        };
        temp.as_file().sync_all().map_err(|e| self.save_error(e))?;

        // An unpersisted temp file is removed when dropped
        temp.persist(&target).map_err(|e| self.save_error(e.error))?;

        Ok(written)
    }
}

/// Directory the temporary file is created in, so the final rename
/// never crosses filesystems
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

impl HabitStorage for FlatFileStorage {
    fn load_into(&self, registry: &mut Registry) -> Result<usize, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No habits file at {}, starting empty", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(StorageError::Read { path: self.path.clone(), source });
            }
        };

        let applied = parse_records(&content, registry)?;
        tracing::info!("Loaded {} records from {}", applied, self.path.display());
        Ok(applied)
    }

    fn save(&self, registry: &Registry) -> Result<(), StorageError> {
        let written = self.replace_contents(|out| write_records(out, registry))?;
        tracing::info!("Saved {} records to {}", written, self.path.display());
        Ok(())
    }
}

/// Parse a zero-padded `YYYY-MM-DD` date
///
/// chrono alone would also take `2025-1-5`, which is not ISO-8601.
fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let bytes = value.as_bytes();
    let iso_shape = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !iso_shape {
        return Err(DateError::NotIsoDate);
    }

    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

/// Apply every record in `content` to `registry`
///
/// Lines without a comma are skipped, as are lines whose habit field is
/// blank. An unparseable date stops the load; records before it stay
/// applied.
pub fn parse_records(content: &str, registry: &mut Registry) -> Result<usize, StorageError> {
    let mut applied = 0;

    for (index, line) in content.lines().enumerate() {
        let Some((habit, date)) = line.split_once(',') else {
            continue;
        };

        let date = date.trim();
        let date = if date.is_empty() {
            None
        } else {
            let parsed = parse_date(date).map_err(|source| {
                StorageError::Load { line: index + 1, value: date.to_string(), source }
            })?;
            Some(parsed)
        };

        let result = match date {
            Some(date) => registry.record(habit, date),
            None => registry.register(habit),
        };

        match result {
            Ok(_) => applied += 1,
            Err(e) => tracing::warn!("Skipping line {}: {}", index + 1, e),
        }
    }

    Ok(applied)
}

/// Write one line per (habit, date) pair, or `name,` for a habit with no dates
pub fn write_records<W: Write>(out: &mut W, registry: &Registry) -> io::Result<usize> {
    let mut written = 0;

    for (name, dates) in registry.all() {
        if dates.is_empty() {
            writeln!(out, "{},", name)?;
            written += 1;
            continue;
        }

        for date in dates.iter() {
            writeln!(out, "{},{}", name, date.format(DATE_FORMAT))?;
            written += 1;
        }
    }

    Ok(written)
}
