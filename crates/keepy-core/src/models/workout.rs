// ABOUTME: Workout session state, persisted history records, and per-exercise personal records
// ABOUTME: History serializes with the camelCase field names shared with the mobile client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use super::exercise::Exercise;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A workout in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Exercise being performed
    pub exercise: Exercise,
    /// Repetitions the user aims for
    pub target_count: u16,
    /// Repetitions completed so far
    pub current_count: u16,
    /// When the session started
    pub start_time: DateTime<Utc>,
    /// Set once `current_count` reaches `target_count`
    pub is_completed: bool,
}

impl WorkoutSession {
    /// Start a session
    #[must_use]
    pub const fn new(exercise: Exercise, target_count: u16, start_time: DateTime<Utc>) -> Self {
        Self {
            exercise,
            target_count,
            current_count: 0,
            start_time,
            is_completed: false,
        }
    }

    /// Record one completed repetition
    ///
    /// Returns `true` when this repetition reaches the target for the first time.
    pub fn record_rep(&mut self) -> bool {
        self.current_count = self.current_count.saturating_add(1);
        let reached = !self.is_completed && self.current_count >= self.target_count;
        if reached {
            self.is_completed = true;
        }
        reached
    }

    /// Whole seconds elapsed between the session start and `now`, never negative
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u32 {
        let seconds = (now - self.start_time).num_seconds().max(0);
        u32::try_from(seconds).unwrap_or(u32::MAX)
    }

    /// Fraction of the target reached, in percent (0 when no target is set)
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.target_count == 0 {
            return 0;
        }
        u32::from(self.current_count) * 100 / u32::from(self.target_count)
    }

    /// Freeze the session into a history record
    #[must_use]
    pub fn into_history(self, finished_at: DateTime<Utc>, calories_burned: f32) -> WorkoutHistory {
        WorkoutHistory {
            id: Uuid::new_v4().to_string(),
            exercise_id: self.exercise.id(),
            exercise_name: self.exercise.display_name().to_owned(),
            count: self.current_count,
            target_count: self.target_count,
            date: finished_at.timestamp_millis(),
            duration_seconds: self.elapsed_seconds(finished_at),
            calories_burned,
            is_completed: self.current_count >= self.target_count,
        }
    }
}

/// A finished workout as stored by the history collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutHistory {
    /// Unique record id
    pub id: String,
    /// Persisted exercise id (1-5)
    pub exercise_id: u16,
    /// Exercise display name at the time of the workout
    pub exercise_name: String,
    /// Repetitions completed
    pub count: u16,
    /// Repetitions targeted
    pub target_count: u16,
    /// Epoch milliseconds when the workout finished
    pub date: i64,
    /// Workout length in seconds
    #[serde(rename = "duration")]
    pub duration_seconds: u32,
    /// Estimated energy expenditure in kcal
    pub calories_burned: f32,
    /// Whether the target was reached
    pub is_completed: bool,
}

impl WorkoutHistory {
    /// Exercise for the stored id, if still known
    #[must_use]
    pub fn exercise(&self) -> Option<Exercise> {
        Exercise::from_id(i64::from(self.exercise_id))
    }

    /// Finish time as a UTC timestamp
    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }
}

/// Best and average performance for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Persisted exercise id
    pub exercise_id: u16,
    /// Exercise display name
    pub exercise_name: String,
    /// Highest repetition count achieved
    pub max_count: u16,
    /// Epoch milliseconds of the workout that set `max_count`
    pub best_date: i64,
    /// Number of workouts folded into the record
    pub total_workouts: u32,
    /// Mean repetition count over all workouts
    pub average_count: f32,
}

impl PersonalRecord {
    /// Record seeded from a single workout
    #[must_use]
    pub fn first(workout: &WorkoutHistory) -> Self {
        Self {
            exercise_id: workout.exercise_id,
            exercise_name: workout.exercise_name.clone(),
            max_count: workout.count,
            best_date: workout.date,
            total_workouts: 1,
            average_count: f32::from(workout.count),
        }
    }

    /// Fold one more workout into the record
    ///
    /// The best date only moves on a strictly higher count; ties keep the
    /// earlier record.
    pub fn update(&mut self, workout: &WorkoutHistory) {
        let total = self.total_workouts.saturating_add(1);
        self.average_count = self
            .average_count
            .mul_add(self.total_workouts as f32, f32::from(workout.count))
            / total as f32;
        self.total_workouts = total;
        if workout.count > self.max_count {
            self.max_count = workout.count;
            self.best_date = workout.date;
        }
        self.exercise_name.clone_from(&workout.exercise_name);
    }

    /// Rebuild records for every exercise present in `history`
    ///
    /// Results are ordered by exercise id.
    #[must_use]
    pub fn from_history(history: &[WorkoutHistory]) -> Vec<Self> {
        let mut records: BTreeMap<u16, Self> = BTreeMap::new();
        for workout in history {
            records
                .entry(workout.exercise_id)
                .and_modify(|record| record.update(workout))
                .or_insert_with(|| Self::first(workout));
        }
        records.into_values().collect()
    }
}
