// ABOUTME: Data model re-exports for landmarks, exercises, feedback, and workout records
// ABOUTME: Plain serializable types shared by the analysis crate and the application layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Data Models
//!
//! - [`LandmarkSnapshot`]: one frame of pose-estimator output
//! - [`Exercise`]: the supported exercise catalogue
//! - [`FormFeedback`]: one observation from a form analyzer
//! - [`WorkoutSession`] / [`WorkoutHistory`] / [`PersonalRecord`]: workout lifecycle records

mod exercise;
mod feedback;
mod landmarks;
mod workout;

pub use exercise::Exercise;
pub use feedback::{FeedbackSeverity, FeedbackType, FormCheck, FormFeedback};
pub use landmarks::{Landmark, LandmarkSnapshot, Point, PoseLandmark, PoseView, LANDMARK_COUNT};
pub use workout::{PersonalRecord, WorkoutHistory, WorkoutSession};
