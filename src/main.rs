/// Main entry point for the habit tracker
///
/// This file sets up logging, parses command line arguments, loads the
/// habits file and starts the interactive menu on stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use chrono::NaiveDate;
use tracing::{info, warn};

use habit_tracker::{FlatFileStorage, HabitTracker, Menu, DEFAULT_FILE_NAME};

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the habits file
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Reference date for marking and streaks (YYYY-MM-DD), defaults to today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print habit summaries and the weekly heatmap as JSON and exit
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the menu
        .init();

    let mut tracker = HabitTracker::new(FlatFileStorage::new(args.file));
    if let Some(today) = args.today {
        tracker = tracker.with_today(today);
    }
    info!(
        "Using habits file at {} (today is {})",
        tracker.storage().path().display(),
        tracker.today()
    );

    // A bad record stops the load but not the program
    if let Err(e) = tracker.load() {
        warn!("Continuing with partially loaded data");
        println!("{}", e);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tracker.report())?);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(&mut tracker)?;

    info!("Habit tracker shutdown complete");
    Ok(())
}
