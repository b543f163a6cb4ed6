// ABOUTME: Core types for the Keepy Fitness pose coaching engine
// ABOUTME: Foundation crate with error handling, landmark models, geometry, and workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

#![deny(unsafe_code)]

//! # Keepy Core
//!
//! Foundation crate providing shared types for the Keepy Fitness coaching
//! engine. Everything here is plain data or pure math; the analysis logic
//! lives in `keepy-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **geometry**: Angle and distance helpers over landmark positions
//! - **models**: Landmarks, exercises, form feedback, and workout records

/// Unified error handling system with standard error codes
pub mod errors;

/// Angle and distance helpers shared by every exercise analyzer
pub mod geometry;

/// Core data models (`LandmarkSnapshot`, `Exercise`, `FormFeedback`, `WorkoutHistory`)
pub mod models;
