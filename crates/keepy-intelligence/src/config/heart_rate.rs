// ABOUTME: Camera heart-rate estimation settings for the fingertip photoplethysmography pipeline
// ABOUTME: Sampling rate, filter constants, peak detection limits, and plausible BPM bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use super::{apply_env_var, ConfigError};
use serde::{Deserialize, Serialize};

/// Heart-rate estimation configuration
///
/// Interval limits are in samples; at 30 fps the default 10..=60 window
/// corresponds to 30-180 BPM between consecutive beats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateConfig {
    /// Camera frame rate the samples were captured at
    pub sample_rate_fps: f64,
    /// Samples required before an estimate is attempted
    pub min_samples: usize,
    /// Most recent samples used for one estimate
    pub window_samples: usize,
    /// Moving-average window used to smooth the signal
    pub smoothing_window: usize,
    /// High-pass filter coefficient removing the DC component (0.0-1.0)
    pub high_pass_alpha: f64,
    /// Peak threshold as mean plus this factor times the mean absolute deviation
    pub peak_threshold_factor: f64,
    /// A peak must exceed this many neighbours on each side
    pub peak_neighborhood: usize,
    /// Minimum distance between accepted peaks (samples)
    pub min_peak_distance: usize,
    /// Peaks required for an estimate
    pub min_peaks: usize,
    /// Shortest plausible beat interval (samples)
    pub min_interval: usize,
    /// Longest plausible beat interval (samples)
    pub max_interval: usize,
    /// Lowest BPM reported
    pub min_bpm: u32,
    /// Highest BPM reported
    pub max_bpm: u32,
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            sample_rate_fps: 30.0,
            min_samples: 60,
            window_samples: 90,
            smoothing_window: 7,
            high_pass_alpha: 0.95,
            peak_threshold_factor: 0.5,
            peak_neighborhood: 2,
            min_peak_distance: 15,
            min_peaks: 3,
            min_interval: 10,
            max_interval: 60,
            min_bpm: 40,
            max_bpm: 200,
        }
    }
}

impl HeartRateConfig {
    /// Load from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var("KEEPY_HEART_RATE_FPS", &mut config.sample_rate_fps)?;
        apply_env_var("KEEPY_HEART_RATE_WINDOW", &mut config.window_samples)?;
        apply_env_var("KEEPY_HEART_RATE_MIN_SAMPLES", &mut config.min_samples)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_fps <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("sample_rate_fps must be positive"));
        }
        if !(0.0..1.0).contains(&self.high_pass_alpha) {
            return Err(ConfigError::ValueOutOfRange(
                "high_pass_alpha must be in [0.0, 1.0)",
            ));
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::ValueOutOfRange("smoothing_window must be positive"));
        }
        if self.min_samples > self.window_samples {
            return Err(ConfigError::InvalidRange(
                "min_samples must be <= window_samples",
            ));
        }
        if self.min_interval >= self.max_interval {
            return Err(ConfigError::InvalidRange("min_interval must be < max_interval"));
        }
        if self.min_bpm >= self.max_bpm {
            return Err(ConfigError::InvalidRange("min_bpm must be < max_bpm"));
        }
        Ok(())
    }
}
