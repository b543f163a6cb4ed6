// ABOUTME: Integration tests for the JSON-lines workout history store
// ABOUTME: Covers file creation, tolerant reading, ordering, and personal-record derivation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use keepy_fitness::core::models::{Exercise, WorkoutHistory};
use keepy_fitness::history::{JsonLinesHistoryStore, WorkoutHistoryStore};
use tempfile::TempDir;

fn workout(exercise: Exercise, count: u16, date: i64) -> WorkoutHistory {
    WorkoutHistory {
        id: format!("{}-{date}", exercise.slug()),
        exercise_id: exercise.id(),
        exercise_name: exercise.display_name().to_owned(),
        count,
        target_count: 10,
        date,
        duration_seconds: 90,
        calories_burned: 4.2,
        is_completed: count >= 10,
    }
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonLinesHistoryStore::new(dir.path().join("none.jsonl"));
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.personal_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("history.jsonl");
    let store = JsonLinesHistoryStore::new(&path);

    let saved = workout(Exercise::Squat, 12, 1_700_000_000_000);
    store.save(&saved).await.unwrap();

    assert!(path.exists());
    assert_eq!(store.list().await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn test_records_survive_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.jsonl");

    let first = JsonLinesHistoryStore::new(&path);
    first.save(&workout(Exercise::PushUp, 8, 1_000)).await.unwrap();
    first.save(&workout(Exercise::PushUp, 11, 3_000)).await.unwrap();
    first.save(&workout(Exercise::Plank, 3, 2_000)).await.unwrap();

    let reopened = JsonLinesHistoryStore::new(&path);
    let dates: Vec<i64> = reopened
        .list()
        .await
        .unwrap()
        .iter()
        .map(|w| w.date)
        .collect();
    assert_eq!(dates, vec![3_000, 2_000, 1_000]);

    let push_ups = reopened.list_for_exercise(Exercise::PushUp).await.unwrap();
    assert_eq!(push_ups.len(), 2);
    assert!(push_ups.iter().all(|w| w.exercise() == Some(Exercise::PushUp)));
}

#[tokio::test]
async fn test_malformed_lines_are_skipped() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.jsonl");
    let good = serde_json::to_string(&workout(Exercise::JumpingJack, 20, 5_000)).unwrap();
    tokio::fs::write(&path, format!("{good}\nnot json at all\n\n{{\"id\":\"partial\"}}\n"))
        .await
        .unwrap();

    let store = JsonLinesHistoryStore::new(&path);
    let workouts = store.list().await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].count, 20);
}

#[tokio::test]
async fn test_stored_format_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.jsonl");
    let store = JsonLinesHistoryStore::new(&path);
    store.save(&workout(Exercise::TreePose, 10, 9_000)).await.unwrap();

    let line = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["exerciseId"], 5);
    assert_eq!(value["targetCount"], 10);
    assert_eq!(value["duration"], 90);
    assert_eq!(value["isCompleted"], true);
}

#[tokio::test]
async fn test_personal_records_from_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonLinesHistoryStore::new(dir.path().join("history.jsonl"));
    for (count, date) in [(10, 1_000), (14, 2_000), (14, 3_000), (6, 4_000)] {
        store
            .save(&workout(Exercise::Squat, count, date))
            .await
            .unwrap();
    }
    store.save(&workout(Exercise::PushUp, 5, 5_000)).await.unwrap();

    let squat = store
        .personal_record(Exercise::Squat)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(squat.max_count, 14);
    // A tie keeps the earlier best
    assert_eq!(squat.best_date, 2_000);
    assert_eq!(squat.total_workouts, 4);
    assert!((squat.average_count - 11.0).abs() < 1e-4);

    let records = store.personal_records().await.unwrap();
    let ids: Vec<u16> = records.iter().map(|r| r.exercise_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(store
        .personal_record(Exercise::Plank)
        .await
        .unwrap()
        .is_none());
}
