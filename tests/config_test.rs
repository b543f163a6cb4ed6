// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Checks KEEPY_* overrides, parse and validation failures, and the history location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use keepy_fitness::config::{AppConfig, HISTORY_PATH_ENV};
use keepy_fitness::core::errors::ErrorCode;
use keepy_fitness::core::models::Exercise;
use keepy_fitness::intelligence::config::{CoachingConfig, HeartRateConfig};
use keepy_fitness::intelligence::quality_score::score;
use keepy_fitness::intelligence::{ConfigError, FormAnalysisConfig, FormAnalyzer};
use serial_test::serial;

mod common;

/// Runs `body` with the variables set, removing them afterwards
fn with_env<T>(vars: &[(&str, &str)], body: impl FnOnce() -> T) -> T {
    for (name, value) in vars {
        env::set_var(name, value);
    }
    let result = body();
    for (name, _) in vars {
        env::remove_var(name);
    }
    result
}

#[test]
#[serial]
fn test_defaults_load_without_overrides() {
    let config = FormAnalysisConfig::load().unwrap();
    assert_eq!(config, FormAnalysisConfig::default());
    assert_eq!(CoachingConfig::load().unwrap(), CoachingConfig::default());
}

#[test]
#[serial]
fn test_numeric_overrides_are_applied() {
    let config = with_env(
        &[
            ("KEEPY_PLANK_MAX_HIP_OFFSET", "55"),
            ("KEEPY_SQUAT_DEPTH_MARGIN", " 25.5 "),
            ("KEEPY_SPEECH_COOLDOWN_MS", "500"),
        ],
        AppConfig::from_env,
    )
    .unwrap();

    assert!((config.analysis.plank.max_hip_offset - 55.0).abs() < f64::EPSILON);
    assert!((config.analysis.squat.depth_margin - 25.5).abs() < f64::EPSILON);
    assert_eq!(config.coaching.speech_cooldown_ms, 500);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    let result = with_env(&[("KEEPY_SQUAT_DEPTH_MARGIN", "abc")], FormAnalysisConfig::load);
    let Err(ConfigError::Parse(message)) = result else {
        panic!("expected a parse error, got {result:?}");
    };
    assert!(message.contains("KEEPY_SQUAT_DEPTH_MARGIN"));
}

#[test]
#[serial]
fn test_score_weights_ignore_environment() {
    let config = with_env(
        &[
            ("KEEPY_SCORE_CRITICAL_WEIGHT", "0"),
            ("KEEPY_SCORE_WARNING_WEIGHT", "0"),
            ("KEEPY_SCORE_INFO_WEIGHT", "0"),
        ],
        FormAnalysisConfig::load,
    )
    .unwrap();
    let analyzer = FormAnalyzer::new(config);

    assert_eq!(
        score(&analyzer, Exercise::PushUp, &common::push_up_pose(70.0)),
        95
    );
    assert!(
        score(
            &analyzer,
            Exercise::Squat,
            &common::standing_with_knee_forward(50.0)
        ) <= 80
    );
}

#[test]
#[serial]
fn test_nan_pixel_margin_is_rejected() {
    let result = with_env(&[("KEEPY_SQUAT_DEPTH_MARGIN", "NaN")], FormAnalysisConfig::load);
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_negative_pixel_margin_is_rejected() {
    let result = with_env(
        &[("KEEPY_PLANK_MAX_HIP_OFFSET", "-10")],
        FormAnalysisConfig::load,
    );
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    let error = with_env(&[("KEEPY_PLANK_MAX_HIP_OFFSET", "-10")], AppConfig::from_env)
        .unwrap_err();
    assert!(matches!(error.code, ErrorCode::ConfigInvalid));
}

#[test]
#[serial]
fn test_heart_rate_window_must_hold_min_samples() {
    let result = with_env(
        &[
            ("KEEPY_HEART_RATE_WINDOW", "30"),
            ("KEEPY_HEART_RATE_MIN_SAMPLES", "60"),
        ],
        HeartRateConfig::load,
    );
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_history_path_from_environment() {
    let config = with_env(
        &[(HISTORY_PATH_ENV, "/var/lib/keepy/history.jsonl")],
        AppConfig::from_env,
    )
    .unwrap();
    assert_eq!(
        config.history_path,
        PathBuf::from("/var/lib/keepy/history.jsonl")
    );
}

#[test]
#[serial]
fn test_blank_history_path_falls_back_to_default() {
    let config = with_env(&[(HISTORY_PATH_ENV, "   ")], AppConfig::from_env).unwrap();
    assert_eq!(
        config.history_path,
        keepy_fitness::config::default_history_path()
    );
}
