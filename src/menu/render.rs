/// Text rendering for the menu
///
/// Everything written to the terminal goes through these functions so the
/// layout stays in one place.

use std::io::{self, Write};
use chrono::Datelike;

use crate::analytics::Heatmap;
use crate::domain::HabitName;
use crate::menu::MenuChoice;
use crate::tools::ListHabitsResponse;

/// Heatmap rows show at most this many characters of the habit name
const HEATMAP_NAME_WIDTH: usize = 6;

const DONE: &str = "■";
const MISSED: &str = "□";

pub fn main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== HABIT TRACKER ===")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}) {}", choice.key(), choice.label())?;
    }
    Ok(())
}

/// Numbered list used when picking a habit
pub fn habit_choices<W: Write>(out: &mut W, names: &[HabitName]) -> io::Result<()> {
    for (index, name) in names.iter().enumerate() {
        writeln!(out, "{}) {}", index + 1, name)?;
    }
    Ok(())
}

pub fn habit_table<W: Write>(out: &mut W, list: &ListHabitsResponse) -> io::Result<()> {
    writeln!(out, "{:<20} {:<8} {:<12} {:<12}", "Habit", "Days", "Streak", "BestStreak")?;
    writeln!(out, "{}", "-".repeat(59))?;
    for habit in &list.habits {
        writeln!(
            out,
            "{:<20} {:<8} {:<12} {:<12}",
            habit.name, habit.total_days, habit.current_streak, habit.best_streak
        )?;
    }
    Ok(())
}

pub fn heatmap<W: Write>(out: &mut W, heatmap: &Heatmap) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Last {} days ({} = done, {} = miss):", heatmap.dates.len(), DONE, MISSED)?;

    let days: Vec<String> = heatmap.dates.iter().map(|d| d.day().to_string()).collect();
    writeln!(out, "Dates : {}", days.join(" "))?;

    for row in &heatmap.rows {
        let short: String = row.name.chars().take(HEATMAP_NAME_WIDTH).collect();
        write!(out, "{:<width$}: ", short, width = HEATMAP_NAME_WIDTH)?;
        for done in &row.days {
            write!(out, "{} ", if *done { DONE } else { MISSED })?;
        }
        writeln!(out)?;
    }
    Ok(())
}
