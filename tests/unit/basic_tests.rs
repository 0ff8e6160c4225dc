/// Basic unit tests to verify core functionality through the public API
use habit_tracker::*;
use chrono::NaiveDate;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_adding_same_date_twice_keeps_size() {
        let mut dates = DateSet::new();
        dates.add(day(2025, 11, 12));
        let size = dates.len();
        dates.add(day(2025, 11, 12));

        assert_eq!(dates.len(), size);
    }

    #[test]
    fn test_current_streak_three_days() {
        let today = day(2025, 11, 12);
        let dates: DateSet = [today, day(2025, 11, 11), day(2025, 11, 10)].into_iter().collect();

        assert_eq!(current_streak(&dates, today), 3);
    }

    #[test]
    fn test_current_streak_today_missing() {
        let today = day(2025, 11, 12);
        let dates: DateSet = [day(2025, 11, 11), day(2025, 11, 10)].into_iter().collect();

        assert_eq!(current_streak(&dates, today), 0);
    }

    #[test]
    fn test_best_streak_with_trailing_single_day() {
        let dates: DateSet = [
            day(2025, 1, 1),
            day(2025, 1, 2),
            day(2025, 1, 3),
            day(2025, 1, 10),
        ].into_iter().collect();

        assert_eq!(best_streak(&dates), 3);
    }

    #[test]
    fn test_name_normalization_single_entry() {
        let mut registry = Registry::new();
        registry.register("read").unwrap();
        registry.register("Read").unwrap();

        let names: Vec<String> = registry.all().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, vec!["Read".to_string()]);
    }

    #[test]
    fn test_heatmap_empty_registry() {
        let map = heatmap(&Registry::new(), day(2025, 11, 12), DEFAULT_HEATMAP_WINDOW);
        assert!(map.rows.is_empty());
    }

    #[test]
    fn test_add_then_mark_through_tools() {
        let mut registry = Registry::new();
        tools::create_habit(&mut registry, "journal").unwrap();
        let response = tools::log_habit(&mut registry, "1", day(2025, 11, 12)).unwrap();

        assert_eq!(response.name, "Journal");
        assert_eq!(response.current_streak, 1);
    }
}
