/// Interactive menu
///
/// This module drives the tracker from a line-based terminal session:
/// it reads choices, dispatches to the habit operations and renders
/// their results.

pub mod render;
pub mod session;

// Re-export main types
pub use session::Menu;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddHabit,
    MarkToday,
    ListHabits,
    Heatmap,
    SaveAndExit,
}

impl MenuChoice {
    /// All entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddHabit,
        MenuChoice::MarkToday,
        MenuChoice::ListHabits,
        MenuChoice::Heatmap,
        MenuChoice::SaveAndExit,
    ];

    /// Parse the number typed at the "Choice" prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddHabit),
            "2" => Some(MenuChoice::MarkToday),
            "3" => Some(MenuChoice::ListHabits),
            "4" => Some(MenuChoice::Heatmap),
            "5" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::AddHabit => 1,
            MenuChoice::MarkToday => 2,
            MenuChoice::ListHabits => 3,
            MenuChoice::Heatmap => 4,
            MenuChoice::SaveAndExit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddHabit => "Add habit",
            MenuChoice::MarkToday => "Mark today done",
            MenuChoice::ListHabits => "List habits (with streaks)",
            MenuChoice::Heatmap => "Show last 7 days heatmap",
            MenuChoice::SaveAndExit => "Exit",
        }
    }
}
