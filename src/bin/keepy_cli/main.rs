// ABOUTME: Keepy CLI - command-line front end for the pose coaching engine
// ABOUTME: Replays recorded sessions, inspects workout history, and runs the estimators and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness
//!
//! Usage:
//! ```bash
//! # Replay a JSON-lines landmark recording and save the result
//! keepy-cli replay squats.jsonl --exercise squat --target 15 --save
//!
//! # Show recent workouts and personal records
//! keepy-cli history list --limit 10
//! keepy-cli history records
//!
//! # Estimate calories for a set
//! keepy-cli calories --exercise push-up --reps 20 --duration 60
//!
//! # Estimate heart rate from per-frame brightness means
//! keepy-cli heart-rate finger.txt
//!
//! # Calories in a recognised food
//! keepy-cli food "French fries"
//!
//! # Exercises for the current weather (WMO code, °C, km/h)
//! keepy-cli weather --code 2 --temp 21.5 --wind 12
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use keepy_fitness::config::AppConfig;
use keepy_fitness::core::models::Exercise;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "keepy-cli",
    about = "Keepy Fitness coaching CLI",
    long_about = "Replay recorded pose sessions through the coaching engine and inspect workout history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// History file override (defaults to KEEPY_HISTORY_PATH or the platform data directory)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run a recorded session through the tracker
    Replay {
        /// JSON-lines file with one landmark snapshot per line
        recording: PathBuf,

        /// Exercise performed (name or id 1-5)
        #[arg(long, short = 'e')]
        exercise: Exercise,

        /// Repetition goal
        #[arg(long, short = 't', default_value = "10")]
        target: u16,

        /// Append the finished workout to the history file
        #[arg(long)]
        save: bool,

        /// Print one JSON frame report per processed frame
        #[arg(long)]
        reports: bool,
    },

    /// Workout history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Estimate calories for a set
    Calories {
        /// Exercise performed (name or id 1-5)
        #[arg(long, short = 'e')]
        exercise: Exercise,

        /// Repetitions completed
        #[arg(long, short = 'r')]
        reps: u32,

        /// Set duration in seconds
        #[arg(long, short = 'd', default_value = "0")]
        duration: u32,
    },

    /// Estimate heart rate from fingertip camera samples
    HeartRate {
        /// File of per-frame brightness means (whitespace or comma separated)
        samples: PathBuf,

        /// Capture frame rate override
        #[arg(long)]
        fps: Option<f64>,
    },

    /// Calorie estimate for a food label from the food classifier
    Food {
        /// Food label, e.g. "Pizza"
        label: String,
    },

    /// Suggest exercises for the current weather
    Weather {
        /// WMO weather code
        #[arg(long, short = 'c')]
        code: i32,

        /// Air temperature in °C
        #[arg(long, short = 't', allow_negative_numbers = true)]
        temp: f64,

        /// Wind speed in km/h
        #[arg(long, short = 'w', default_value = "0")]
        wind: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List stored workouts, most recent first
    List {
        /// Only this exercise
        #[arg(long, short = 'e')]
        exercise: Option<Exercise>,

        /// Maximum number of workouts to show
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Personal records per exercise
    Records {
        /// Only this exercise
        #[arg(long, short = 'e')]
        exercise: Option<Exercise>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        "debug".clone_into(&mut config.logging.level);
    }
    config.logging.init()?;

    if let Some(history) = cli.history {
        config = config.with_history_path(history);
    }
    debug!(history = %config.history_path.display(), "Keepy CLI starting");

    match cli.command {
        Command::Replay {
            recording,
            exercise,
            target,
            save,
            reports,
        } => {
            let options = commands::replay::ReplayOptions {
                exercise,
                target,
                save,
                reports,
            };
            commands::replay::run(&config, &recording, options).await?;
        }
        Command::History { action } => match action {
            HistoryCommand::List { exercise, limit } => {
                commands::history::list(&config, exercise, limit).await?;
            }
            HistoryCommand::Records { exercise } => {
                commands::history::records(&config, exercise).await?;
            }
        },
        Command::Calories {
            exercise,
            reps,
            duration,
        } => commands::calories::run(exercise, reps, duration),
        Command::HeartRate { samples, fps } => {
            commands::heart_rate::run(&config, &samples, fps).await?;
        }
        Command::Food { label } => commands::food::run(&label),
        Command::Weather { code, temp, wind } => commands::weather::run(code, temp, wind)?,
    }

    Ok(())
}
