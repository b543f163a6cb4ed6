// ABOUTME: Workout history persistence behind an async store trait
// ABOUTME: In-memory backend for tests and a JSON-lines file backend for the CLI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

//! Workout history storage
//!
//! A finished [`WorkoutTracker`](keepy_intelligence::WorkoutTracker) produces
//! one [`WorkoutHistory`]; the caller hands it to a [`WorkoutHistoryStore`].
//! Personal records are derived from the stored history, never stored.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use keepy_core::errors::{AppError, AppResult};
use keepy_core::models::{Exercise, PersonalRecord, WorkoutHistory};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::warn;

use crate::logging::AppLogger;

/// Persistence for finished workouts
#[async_trait::async_trait]
pub trait WorkoutHistoryStore: Send + Sync {
    /// Append one finished workout
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    async fn save(&self, workout: &WorkoutHistory) -> AppResult<()>;

    /// All workouts, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    async fn list(&self) -> AppResult<Vec<WorkoutHistory>>;

    /// Workouts of one exercise, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    async fn list_for_exercise(&self, exercise: Exercise) -> AppResult<Vec<WorkoutHistory>> {
        let id = exercise.id();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|workout| workout.exercise_id == id)
            .collect())
    }

    /// Best and average performance for one exercise, `None` without workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    async fn personal_record(&self, exercise: Exercise) -> AppResult<Option<PersonalRecord>> {
        let workouts = self.list_for_exercise(exercise).await?;
        // oldest first so that ties keep the earliest best date
        Ok(PersonalRecord::from_history(&sort_oldest_first(workouts)).pop())
    }

    /// Records for every exercise with at least one workout, ordered by exercise id
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    async fn personal_records(&self) -> AppResult<Vec<PersonalRecord>> {
        let workouts = self.list().await?;
        Ok(PersonalRecord::from_history(&sort_oldest_first(workouts)))
    }
}

fn sort_oldest_first(mut workouts: Vec<WorkoutHistory>) -> Vec<WorkoutHistory> {
    workouts.sort_by_key(|workout| workout.date);
    workouts
}

fn sort_newest_first(workouts: &mut [WorkoutHistory]) {
    workouts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// History kept in process memory
#[derive(Clone, Default)]
pub struct InMemoryHistoryStore {
    workouts: Arc<RwLock<Vec<WorkoutHistory>>>,
}

impl InMemoryHistoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl WorkoutHistoryStore for InMemoryHistoryStore {
    async fn save(&self, workout: &WorkoutHistory) -> AppResult<()> {
        let mut workouts = self.workouts.write().await;
        workouts.push(workout.clone());
        let total = workouts.len();
        drop(workouts);
        AppLogger::log_history_operation("save", "memory", true, total);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<WorkoutHistory>> {
        let mut workouts = self.workouts.read().await.clone();
        sort_newest_first(&mut workouts);
        Ok(workouts)
    }
}

/// History stored as one JSON record per line
///
/// The file and its parent directories are created on the first save. A
/// missing file reads as an empty history; lines that fail to parse are
/// skipped with a warning.
#[derive(Debug, Clone)]
pub struct JsonLinesHistoryStore {
    path: PathBuf,
    write_lock: Arc<RwLock<()>>,
}

impl JsonLinesHistoryStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(RwLock::new(())),
        }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> AppResult<Vec<WorkoutHistory>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read history file {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        let mut workouts = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<WorkoutHistory>(line) {
                Ok(workout) => workouts.push(workout),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    error = %e,
                    "Skipping malformed history record"
                ),
            }
        }
        Ok(workouts)
    }
}

#[async_trait::async_trait]
impl WorkoutHistoryStore for JsonLinesHistoryStore {
    async fn save(&self, workout: &WorkoutHistory) -> AppResult<()> {
        let mut line = serde_json::to_string(workout)?;
        line.push('\n');

        let _guard = self.write_lock.write().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                AppError::storage(format!(
                    "Failed to open history file {}: {e}",
                    self.path.display()
                ))
                .with_source(e)
            })?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        AppLogger::log_history_operation("save", "jsonl", true, 1);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<WorkoutHistory>> {
        let _guard = self.write_lock.read().await;
        let mut workouts = self.read_all().await?;
        sort_newest_first(&mut workouts);
        AppLogger::log_history_operation("list", "jsonl", true, workouts.len());
        Ok(workouts)
    }
}
