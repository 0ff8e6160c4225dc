/// Menu session that reads commands and writes results
///
/// This module implements the interactive loop:
/// 1. Shows the main menu and reads a choice
/// 2. Runs the chosen habit operation against the tracker
/// 3. Writes the result, or the error, and shows the menu again
///
/// Operation errors never end the session. The loop ends when the data
/// has been saved or the input is exhausted.

use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

use crate::menu::{render, MenuChoice};
use crate::storage::HabitStorage;
use crate::tools;
use crate::{HabitTracker, TrackerError};

/// Line-based menu over any input and output
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu until the user exits or input ends
    ///
    /// Only terminal I/O failures are returned as errors.
    pub fn run<S: HabitStorage>(&mut self, tracker: &mut HabitTracker<S>) -> Result<(), TrackerError> {
        info!("Starting menu with {} habits", tracker.registry().len());

        loop {
            render::main_menu(&mut self.output)?;

            let Some(choice) = self.prompt("Choice: ")? else {
                info!("Input closed, saving before exit");
                self.finish(tracker)?;
                return Ok(());
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddHabit) => self.add_habit(tracker)?,
                Some(MenuChoice::MarkToday) => self.mark_today(tracker)?,
                Some(MenuChoice::ListHabits) => self.list_habits(tracker)?,
                Some(MenuChoice::Heatmap) => self.heatmap(tracker)?,
                Some(MenuChoice::SaveAndExit) => {
                    if self.finish(tracker)? {
                        return Ok(());
                    }
                }
                None => {
                    debug!("Unknown menu choice: {:?}", choice);
                    writeln!(self.output, "Invalid choice.")?;
                }
            }
        }
    }

    /// Write a prompt and read one trimmed line; None at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_habit<S: HabitStorage>(&mut self, tracker: &mut HabitTracker<S>) -> Result<(), TrackerError> {
        let Some(name) = self.prompt("Habit name: ")? else {
            return Ok(());
        };

        match tools::create_habit(tracker.registry_mut(), &name) {
            Ok(response) => writeln!(self.output, "{}", response.message)?,
            Err(e) => writeln!(self.output, "Name required. {}", e)?,
        }
        Ok(())
    }

    fn mark_today<S: HabitStorage>(&mut self, tracker: &mut HabitTracker<S>) -> Result<(), TrackerError> {
        if tracker.registry().is_empty() {
            writeln!(self.output, "No habits yet.")?;
            return Ok(());
        }

        render::habit_choices(&mut self.output, &tracker.registry().names())?;
        let Some(selection) = self.prompt("Select: ")? else {
            return Ok(());
        };

        let today = tracker.today();
        match tools::log_habit(tracker.registry_mut(), &selection, today) {
            Ok(response) => writeln!(self.output, "{}", response.message)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn list_habits<S: HabitStorage>(&mut self, tracker: &HabitTracker<S>) -> Result<(), TrackerError> {
        if tracker.registry().is_empty() {
            writeln!(self.output, "No habits yet.")?;
            return Ok(());
        }

        let list = tools::list_habits(tracker.analytics(), tracker.registry(), tracker.today());
        render::habit_table(&mut self.output, &list)?;
        Ok(())
    }

    fn heatmap<S: HabitStorage>(&mut self, tracker: &HabitTracker<S>) -> Result<(), TrackerError> {
        if tracker.registry().is_empty() {
            writeln!(self.output, "No habits yet.")?;
            return Ok(());
        }

        let heatmap = tools::weekly_heatmap(tracker.analytics(), tracker.registry(), tracker.today());
        render::heatmap(&mut self.output, &heatmap)?;
        Ok(())
    }

    /// Save and report; returns whether the save succeeded
    fn finish<S: HabitStorage>(&mut self, tracker: &HabitTracker<S>) -> Result<bool, TrackerError> {
        match tracker.save() {
            Ok(()) => {
                writeln!(self.output, "Saved. Bye!")?;
                Ok(true)
            }
            Err(e) => {
                error!("Save failed: {}", e);
                writeln!(self.output, "{}", e)?;
                Ok(false)
            }
        }
    }
}
