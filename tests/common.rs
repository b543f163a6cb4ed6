// ABOUTME: Shared test utilities and synthetic pose fixtures for integration tests
// ABOUTME: Builds landmark snapshots with exact joint angles for each supported exercise
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::similar_names
)]
//! Shared test utilities for `keepy_fitness`
//!
//! Image coordinates: x grows to the right, y grows downwards. Every fixture
//! places joints so that the relevant angles are exact, which keeps the
//! expected feedback independent of floating-point luck near a threshold.

use std::sync::{Mutex, Once, PoisonError};

use keepy_fitness::core::models::{LandmarkSnapshot, PoseLandmark};
use keepy_fitness::intelligence::coaching::{CoachingEvent, CoachingNarrator};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Point at `length` from `origin`, rotated `degrees` clockwise from straight up
fn toward(origin: (f64, f64), degrees: f64, length: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (
        length.mul_add(radians.sin(), origin.0),
        length.mul_add(-radians.cos(), origin.1),
    )
}

fn put(snapshot: LandmarkSnapshot, joint: PoseLandmark, at: (f64, f64)) -> LandmarkSnapshot {
    snapshot.with_point(joint, at.0, at.1)
}

/// Push-up frame with both elbows at `elbow_degrees`, a straight 170 degree
/// torso, and level wrists
pub fn push_up_pose(elbow_degrees: f64) -> LandmarkSnapshot {
    let left_shoulder = (200.0, 300.0);
    let left_elbow = (200.0, 400.0);
    let right_shoulder = (400.0, 300.0);
    let right_elbow = (400.0, 400.0);
    let left_hip = (200.0, 500.0);

    let snapshot = LandmarkSnapshot::new();
    let snapshot = put(snapshot, PoseLandmark::LeftShoulder, left_shoulder);
    let snapshot = put(snapshot, PoseLandmark::RightShoulder, right_shoulder);
    let snapshot = put(snapshot, PoseLandmark::LeftElbow, left_elbow);
    let snapshot = put(snapshot, PoseLandmark::RightElbow, right_elbow);
    let snapshot = put(
        snapshot,
        PoseLandmark::LeftWrist,
        toward(left_elbow, elbow_degrees, 100.0),
    );
    let snapshot = put(
        snapshot,
        PoseLandmark::RightWrist,
        toward(right_elbow, -elbow_degrees, 100.0),
    );
    let snapshot = put(snapshot, PoseLandmark::LeftHip, left_hip);
    let snapshot = put(snapshot, PoseLandmark::RightHip, (400.0, 500.0));
    put(snapshot, PoseLandmark::LeftKnee, toward(left_hip, 170.0, 200.0))
}

/// Squat frame with both knees bent to `knee_degrees`; hips move outwards
/// as the squat deepens so the stance never reads as too wide
pub fn squat_pose(knee_degrees: f64) -> LandmarkSnapshot {
    let left_knee = (300.0, 500.0);
    let right_knee = (500.0, 500.0);

    // The ankle sits straight below the knee (180 degrees); hips swing outwards from there
    let snapshot = LandmarkSnapshot::new();
    let snapshot = put(
        snapshot,
        PoseLandmark::LeftHip,
        toward(left_knee, 180.0 + knee_degrees, 100.0),
    );
    let snapshot = put(
        snapshot,
        PoseLandmark::RightHip,
        toward(right_knee, 180.0 - knee_degrees, 100.0),
    );
    let snapshot = put(snapshot, PoseLandmark::LeftKnee, left_knee);
    let snapshot = put(snapshot, PoseLandmark::RightKnee, right_knee);
    let snapshot = put(snapshot, PoseLandmark::LeftAnkle, (300.0, 600.0));
    put(snapshot, PoseLandmark::RightAnkle, (500.0, 600.0))
}

/// Upright standing squat frame with the left knee shifted `knee_dx` pixels
/// ahead of the left ankle
pub fn standing_with_knee_forward(knee_dx: f64) -> LandmarkSnapshot {
    LandmarkSnapshot::new()
        .with_point(PoseLandmark::LeftHip, 300.0, 400.0)
        .with_point(PoseLandmark::RightHip, 400.0, 400.0)
        .with_point(PoseLandmark::LeftKnee, 300.0 + knee_dx, 500.0)
        .with_point(PoseLandmark::RightKnee, 400.0, 500.0)
        .with_point(PoseLandmark::LeftAnkle, 300.0, 600.0)
        .with_point(PoseLandmark::RightAnkle, 400.0, 600.0)
}

/// Jumping jack frame, arms overhead with feet apart when `open`
pub fn jumping_jack_pose(open: bool) -> LandmarkSnapshot {
    let snapshot = LandmarkSnapshot::new()
        .with_point(PoseLandmark::LeftShoulder, 300.0, 200.0)
        .with_point(PoseLandmark::RightShoulder, 400.0, 200.0);
    if open {
        snapshot
            .with_point(PoseLandmark::LeftWrist, 250.0, 50.0)
            .with_point(PoseLandmark::RightWrist, 450.0, 50.0)
            .with_point(PoseLandmark::LeftAnkle, 200.0, 600.0)
            .with_point(PoseLandmark::RightAnkle, 500.0, 600.0)
    } else {
        snapshot
            .with_point(PoseLandmark::LeftWrist, 280.0, 350.0)
            .with_point(PoseLandmark::RightWrist, 420.0, 350.0)
            .with_point(PoseLandmark::LeftAnkle, 330.0, 600.0)
            .with_point(PoseLandmark::RightAnkle, 370.0, 600.0)
    }
}

/// Plank frame with the hips `hip_rise` pixels above the shoulder line
pub fn plank_pose(hip_rise: f64) -> LandmarkSnapshot {
    LandmarkSnapshot::new()
        .with_point(PoseLandmark::LeftShoulder, 100.0, 300.0)
        .with_point(PoseLandmark::RightShoulder, 110.0, 300.0)
        .with_point(PoseLandmark::LeftHip, 250.0, 300.0 - hip_rise)
        .with_point(PoseLandmark::RightHip, 260.0, 300.0 - hip_rise)
        .with_point(PoseLandmark::LeftAnkle, 400.0, 300.0)
        .with_point(PoseLandmark::RightAnkle, 410.0, 300.0)
}

/// Standing tree-pose frame: straight legs, level shoulders, left ankle
/// raised by `ankle_dy` pixels, no wrists
pub fn tree_pose(ankle_dy: f64) -> LandmarkSnapshot {
    LandmarkSnapshot::new()
        .with_point(PoseLandmark::LeftShoulder, 300.0, 200.0)
        .with_point(PoseLandmark::RightShoulder, 400.0, 200.0)
        .with_point(PoseLandmark::LeftHip, 300.0, 400.0)
        .with_point(PoseLandmark::RightHip, 400.0, 400.0)
        .with_point(PoseLandmark::LeftKnee, 300.0, 500.0)
        .with_point(PoseLandmark::RightKnee, 400.0, 500.0)
        .with_point(PoseLandmark::LeftAnkle, 300.0, 600.0 - ankle_dy)
        .with_point(PoseLandmark::RightAnkle, 400.0, 600.0)
}

/// Ankles only: enough for tree-pose counting, too little for form analysis
pub fn tree_pose_ankles(ankle_dy: f64) -> LandmarkSnapshot {
    LandmarkSnapshot::new()
        .with_point(PoseLandmark::LeftAnkle, 300.0, 600.0 - ankle_dy)
        .with_point(PoseLandmark::RightAnkle, 400.0, 600.0)
}

/// Narrator that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    events: Mutex<Vec<CoachingEvent>>,
}

impl RecordingNarrator {
    /// Events received so far
    pub fn events(&self) -> Vec<CoachingEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CoachingNarrator for RecordingNarrator {
    fn announce(&self, event: &CoachingEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
