// ABOUTME: Configuration module for keepy-intelligence crate
// ABOUTME: Re-exports analysis, heart-rate, and coaching configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use std::env;
use std::str::FromStr;

/// Narration throttle settings
pub mod coaching;
/// Configuration error types
pub mod error;
/// Form analyzer and rep counter thresholds
pub mod form;
/// Camera heart-rate estimation settings
pub mod heart_rate;

pub use coaching::CoachingConfig;
pub use error::ConfigError;
pub use form::{
    FormAnalysisConfig, JumpingJackThresholds, PlankThresholds, PushUpThresholds,
    RepCounterThresholds, SquatThresholds, TreePoseThresholds,
};
pub use heart_rate::HeartRateConfig;

/// Overwrite `target` with the parsed value of `env_var_name` when it is set
pub(crate) fn apply_env_var<T: FromStr>(
    env_var_name: &str,
    target: &mut T,
) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
    }
    Ok(())
}
