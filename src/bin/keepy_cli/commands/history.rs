// ABOUTME: History commands for keepy-cli
// ABOUTME: Lists stored workouts and derives personal records from the JSON-lines history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use anyhow::Result;
use keepy_fitness::config::AppConfig;
use keepy_fitness::core::models::Exercise;
use keepy_fitness::history::{JsonLinesHistoryStore, WorkoutHistoryStore};
use tracing::info;

use crate::helpers::display::{display_history, display_records};

/// List the most recent workouts
pub async fn list(config: &AppConfig, exercise: Option<Exercise>, limit: usize) -> Result<()> {
    let store = JsonLinesHistoryStore::new(&config.history_path);
    let mut workouts = match exercise {
        Some(exercise) => store.list_for_exercise(exercise).await?,
        None => store.list().await?,
    };
    info!(
        path = %store.path().display(),
        workouts = workouts.len(),
        "Loaded workout history"
    );

    workouts.truncate(limit);
    display_history(&workouts);
    Ok(())
}

/// Show personal records
pub async fn records(config: &AppConfig, exercise: Option<Exercise>) -> Result<()> {
    let store = JsonLinesHistoryStore::new(&config.history_path);
    let records = match exercise {
        Some(exercise) => store.personal_record(exercise).await?.into_iter().collect(),
        None => store.personal_records().await?,
    };
    display_records(&records);
    Ok(())
}
