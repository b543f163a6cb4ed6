// ABOUTME: Output formatting helpers for keepy-cli
// ABOUTME: Provides consistent display functions for sessions, history, records, and estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use std::collections::HashMap;

use chrono::{DateTime, Local};
use keepy_fitness::core::models::{FormCheck, PersonalRecord, WorkoutHistory};
use keepy_fitness::intelligence::heart_rate::HeartRateReading;
use keepy_fitness::intelligence::weather::{WeatherCondition, WorkoutWeather};
use keepy_fitness::intelligence::workout_tracker::SessionSummary;

fn format_date(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms).map_or_else(
        || "unknown".to_owned(),
        |date| date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Display the outcome of a replayed session
pub fn display_session(summary: &SessionSummary, workout: &WorkoutHistory, skipped: usize) {
    println!("\nSession Summary");
    println!("{}", "=".repeat(60));
    println!("   Exercise: {}", summary.exercise);
    println!(
        "   {}: {} / {}{}",
        if summary.exercise.is_hold() {
            "Holds"
        } else {
            "Repetitions"
        },
        summary.count,
        summary.target_count,
        if workout.is_completed {
            "  (target reached)"
        } else {
            ""
        }
    );
    println!(
        "   Frames: {} ({} without a person, {} unreadable)",
        summary.frames, summary.empty_frames, skipped
    );
    match summary.average_quality {
        Some(quality) => println!("   Average form score: {quality:.1}"),
        None => println!("   Average form score: n/a"),
    }
    println!("   Duration: {} s", workout.duration_seconds);
    println!("   Calories: {:.1} kcal", workout.calories_burned);
    println!("{}", "=".repeat(60));
}

/// Display how often each form rule fired over a recording
pub fn display_check_counts(counts: &HashMap<FormCheck, usize>, frames: usize) {
    if counts.is_empty() {
        println!("\nNo form feedback in this recording.");
        return;
    }

    let mut rows: Vec<(&FormCheck, &usize)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.message().cmp(b.0.message())));

    println!("\nForm Feedback");
    println!("{}", "-".repeat(60));
    for (check, count) in rows {
        let share = if frames == 0 {
            0.0
        } else {
            *count as f64 * 100.0 / frames as f64
        };
        println!(
            "   {:>5} frames ({share:>5.1}%)  [{:?}] {}",
            count,
            check.severity(),
            check.message()
        );
    }
}

/// Display stored workouts
pub fn display_history(workouts: &[WorkoutHistory]) {
    if workouts.is_empty() {
        println!("No workouts recorded yet.");
        return;
    }

    println!(
        "{:<17} {:<22} {:>9} {:>8} {:>8}",
        "Date", "Exercise", "Reps", "Time", "kcal"
    );
    println!("{}", "-".repeat(68));
    for workout in workouts {
        println!(
            "{:<17} {:<22} {:>4}/{:<4} {:>7}s {:>8.1}{}",
            format_date(workout.date),
            workout.exercise_name,
            workout.count,
            workout.target_count,
            workout.duration_seconds,
            workout.calories_burned,
            if workout.is_completed { "" } else { "  *" }
        );
    }
}

/// Display personal records
pub fn display_records(records: &[PersonalRecord]) {
    if records.is_empty() {
        println!("No personal records yet.");
        return;
    }

    println!("\nPersonal Records");
    println!("{}", "=".repeat(60));
    for record in records {
        println!("   {}", record.exercise_name);
        println!(
            "      Best: {} reps on {}",
            record.max_count,
            format_date(record.best_date)
        );
        println!(
            "      Workouts: {}   Average: {:.1} reps",
            record.total_workouts, record.average_count
        );
    }
}

/// Display a heart-rate estimate
pub fn display_heart_rate(reading: Option<&HeartRateReading>, samples: usize) {
    match reading {
        Some(reading) => {
            println!("\nHeart Rate: {} BPM", reading.bpm);
            println!("   {}", reading.status.label());
            println!("   {}", reading.status.suggestion());
            println!("   ({} samples)", reading.samples);
        }
        None => {
            println!("\nNo reliable heart rate in {samples} samples.");
            println!("   Keep your fingertip still over the camera and flash, then measure again.");
        }
    }
}

/// Display a weather-based workout plan
pub fn display_weather(
    condition: WeatherCondition,
    plan: WorkoutWeather,
    temp_c: f64,
    wind_kmh: f64,
) {
    println!("\n{condition}, {temp_c:.0} °C, wind {wind_kmh:.0} km/h");
    println!("   {}", plan.advice());
    println!(
        "   Train {}:",
        if plan.is_outdoor() { "outdoors" } else { "indoors" }
    );
    for exercise in plan.exercises() {
        println!("      - {exercise}");
    }
}
