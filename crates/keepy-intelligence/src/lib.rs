// ABOUTME: Workout intelligence for pose-based coaching
// ABOUTME: Form analyzers, quality scoring, rep counting, narration, calories, heart rate, weather
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

#![deny(unsafe_code)]

//! # Keepy Intelligence
//!
//! Per-frame analysis of pose landmarks. Everything here is synchronous and
//! free of I/O; collaborators (speech, storage) are reached through traits
//! or plain return values.
//!
//! ## Modules
//!
//! - **config**: Thresholds with environment overrides and validation
//! - **form_analysis**: Rule-based form feedback per exercise
//! - **quality_score**: Severity-weighted 0-100 score
//! - **rep_counter**: Hysteresis phase machine counting repetitions
//! - **coaching**: Narrator trait, phrase script, and throttling
//! - **workout_tracker**: Frame pipeline for one workout
//! - **calories**: Calorie estimate for a finished set
//! - **heart_rate**: Fingertip camera pulse estimation
//! - **food_calories**: Calorie lookup for recognised foods
//! - **weather**: Workout suggestions for the current weather

/// Calorie estimate from repetitions and duration
pub mod calories;

/// Coaching events, narrator trait, and spoken phrases
pub mod coaching;

/// Analysis configuration
pub mod config;

/// Food label calorie lookup
pub mod food_calories;

/// Per-exercise form rules
pub mod form_analysis;

/// Camera heart-rate estimation
pub mod heart_rate;

/// Form quality scoring
pub mod quality_score;

/// Repetition counting
pub mod rep_counter;

/// Weather-based workout suggestions
pub mod weather;

/// Per-session frame pipeline
pub mod workout_tracker;

pub use coaching::{CoachingEvent, CoachingNarrator, CoachingScript, ThrottledNarrator};
pub use config::{ConfigError, FormAnalysisConfig};
pub use form_analysis::FormAnalyzer;
pub use rep_counter::{PhaseSignal, RepCounter, RepPhase};
pub use workout_tracker::{FrameReport, WorkoutTracker};
