/// Basic integration tests against real files
use habit_tracker::*;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::io::Cursor;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pairs(registry: &Registry) -> BTreeSet<(String, NaiveDate)> {
        registry
            .all()
            .flat_map(|(name, dates)| dates.iter().map(move |d| (name.to_string(), d)))
            .collect()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FlatFileStorage::new(dir.path().join("habits.csv"));

        let mut registry = Registry::new();
        let applied = storage.load_into(&mut registry).expect("Missing file should not fail");

        assert_eq!(applied, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FlatFileStorage::new(dir.path().join("habits.csv"));

        let mut registry = Registry::new();
        registry.record("read", day(2025, 11, 12)).unwrap();
        registry.record("read", day(2025, 11, 10)).unwrap();
        registry.record("walk", day(2025, 1, 1)).unwrap();
        registry.register("stretch").unwrap();
        storage.save(&registry).expect("Failed to save");

        let mut loaded = Registry::new();
        storage.load_into(&mut loaded).expect("Failed to load");

        assert_eq!(pairs(&loaded), pairs(&registry));
        // Zero-date habits survive through the empty date field
        assert!(loaded.get("Stretch").unwrap().is_empty());
        assert_eq!(loaded, registry);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.csv");
        std::fs::write(&path, "Old,2020-01-01\nOld,2020-01-02\n").unwrap();

        let mut registry = Registry::new();
        registry.record("new", day(2025, 11, 12)).unwrap();
        FlatFileStorage::new(&path).save(&registry).expect("Failed to save");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "New,2025-11-12\n");
    }

    #[test]
    fn test_bad_date_keeps_partial_registry() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.csv");
        std::fs::write(&path, "Read,2025-11-12\nWalk,not-a-date\n").unwrap();

        let mut tracker = HabitTracker::new(FlatFileStorage::new(&path)).with_today(day(2025, 11, 12));
        let result = tracker.load();

        assert!(matches!(result, Err(TrackerError::Storage(StorageError::Load { line: 2, .. }))));
        assert_eq!(tracker.registry().len(), 1);
        assert!(tracker.registry().get("Read").unwrap().contains(day(2025, 11, 12)));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("habits.csv");

        let result = FlatFileStorage::new(&path).save(&Registry::new());

        assert!(matches!(result, Err(StorageError::Save { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_unpadded_date_stops_load() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.csv");
        std::fs::write(&path, "Read,2025-11-12\nRead,2025-1-5\n").unwrap();

        let mut tracker = HabitTracker::new(FlatFileStorage::new(&path));
        let result = tracker.load();

        assert!(matches!(
            result,
            Err(TrackerError::Storage(StorageError::Load { line: 2, source: DateError::NotIsoDate, .. }))
        ));
        assert_eq!(tracker.registry().get("Read").unwrap().len(), 1);
    }

    #[test]
    fn test_report_near_earliest_date() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = HabitTracker::new(FlatFileStorage::new(dir.path().join("habits.csv")))
            .with_today(NaiveDate::MIN);
        tracker.registry_mut().record("read", NaiveDate::MIN).unwrap();

        let report = tracker.report();

        assert_eq!(report.heatmap.dates, vec![NaiveDate::MIN]);
        assert_eq!(report.heatmap.rows[0].days, vec![true]);
        assert_eq!(report.habits.habits[0].current_streak, 1);
    }

    #[test]
    fn test_menu_session_persists_to_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.csv");
        let today = day(2025, 11, 12);

        let mut tracker = HabitTracker::new(FlatFileStorage::new(&path)).with_today(today);
        tracker.load().expect("Failed to load");

        let mut output = Vec::new();
        Menu::new(Cursor::new("1\nread\n2\n1\n5\n"), &mut output)
            .run(&mut tracker)
            .expect("Menu failed");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Read,2025-11-12\n");

        // A second session sees the saved data
        let mut reopened = HabitTracker::new(FlatFileStorage::new(&path)).with_today(today);
        reopened.load().expect("Failed to reload");
        let report = reopened.report();

        assert_eq!(report.habits.total_habits, 1);
        assert_eq!(report.habits.habits[0].current_streak, 1);
        assert_eq!(report.heatmap.rows[0].days.last(), Some(&true));
    }
}
