// ABOUTME: Main library entry point for the Keepy Fitness coaching tools
// ABOUTME: Wires configuration, logging, recorded-frame input, and history storage around the coaching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

#![deny(unsafe_code)]

//! # Keepy Fitness
//!
//! Pose-based workout coaching. A pose estimator (outside this crate)
//! produces one landmark snapshot per camera frame; the engine turns each
//! snapshot into form feedback, a quality score, a repetition count, and
//! spoken coaching cues. Finished sessions become history records.
//!
//! ## Architecture
//!
//! - **`keepy_core`**: Exercises, landmarks, feedback, workout records, errors
//! - **`keepy_intelligence`**: Form analyzers, scoring, rep counting, narration
//! - **config**: Environment-driven application configuration
//! - **logging**: `tracing` subscriber setup
//! - **recording**: JSON-lines frame recordings and heart-rate sample files
//! - **history**: Workout history stores
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use keepy_fitness::config::AppConfig;
//! use keepy_fitness::history::{JsonLinesHistoryStore, WorkoutHistoryStore};
//! use keepy_fitness::intelligence::coaching::TracingNarrator;
//! use keepy_fitness::intelligence::WorkoutTracker;
//! use keepy_fitness::core::models::{Exercise, LandmarkSnapshot};
//! use keepy_fitness::core::errors::AppResult;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let mut tracker = WorkoutTracker::start(
//!         Exercise::Squat,
//!         15,
//!         config.analysis.clone(),
//!         Arc::new(TracingNarrator),
//!         chrono::Utc::now(),
//!     );
//!     let report = tracker.process_frame(&LandmarkSnapshot::new());
//!     println!("reps so far: {}", report.count);
//!
//!     let store = JsonLinesHistoryStore::new(&config.history_path);
//!     store.save(&tracker.finish(chrono::Utc::now())).await?;
//!     Ok(())
//! }
//! ```

/// Application configuration from environment variables
pub mod config;

/// Workout history storage
pub mod history;

/// Structured logging setup
pub mod logging;

/// Recorded frame and heart-rate sample input
pub mod recording;

/// Domain model, geometry, and error types
pub use keepy_core as core;

/// Per-frame analysis and coaching engine
pub use keepy_intelligence as intelligence;
