// ABOUTME: Fingertip camera heart-rate estimation from per-frame brightness samples
// ABOUTME: Smoothing, DC removal, peak picking, and BPM classification with exercise suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Camera Heart Rate
//!
//! With a fingertip covering the lens and the flash on, the average brightness
//! of the centre of each frame pulses with the blood volume in the finger.
//! The estimator works on those per-frame means: camera capture and YUV
//! decoding stay with the caller, which only hands over the luma plane.
//!
//! ## Pipeline
//!
//! 1. Keep samples strictly inside (0, 255); saturated frames carry no pulse
//! 2. Take the most recent window (90 samples, 3 s at 30 fps)
//! 3. Centred moving average (7 samples)
//! 4. First-order high-pass (alpha 0.95) to remove the DC level
//! 5. Peaks above mean + 0.5 x mean absolute deviation that dominate +-2
//!    neighbours and sit at least 15 samples apart
//! 6. BPM from the mean of the plausible peak intervals (10-60 samples)

use crate::config::HeartRateConfig;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Mean luma of the centred square whose side is a quarter of the shorter frame edge
///
/// `luma` is the row-major Y plane of a `width` x `height` frame; a short
/// buffer only contributes the pixels it actually holds. Returns 0.0 when no
/// pixel could be sampled.
#[must_use]
pub fn sample_frame(luma: &[u8], width: usize, height: usize) -> f64 {
    let half = width.min(height) / 4 / 2;
    let (center_x, center_y) = (width / 2, height / 2);

    let mut sum = 0_u64;
    let mut pixels = 0_u64;
    for y in center_y.saturating_sub(half)..(center_y + half).min(height) {
        for x in center_x.saturating_sub(half)..(center_x + half).min(width) {
            if let Some(value) = luma.get(y * width + x) {
                sum += u64::from(*value);
                pixels += 1;
            }
        }
    }

    if pixels == 0 {
        0.0
    } else {
        sum as f64 / pixels as f64
    }
}

/// Resting heart-rate classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateStatus {
    /// Below 60 BPM
    Slow,
    /// 60-100 BPM
    Normal,
    /// 101-120 BPM
    Elevated,
    /// 121-130 BPM
    High,
    /// Above 130 BPM, most likely a bad measurement
    Abnormal,
}

impl HeartRateStatus {
    /// Classify a measured BPM
    #[must_use]
    pub const fn classify(bpm: u32) -> Self {
        match bpm {
            0..=59 => Self::Slow,
            60..=100 => Self::Normal,
            101..=120 => Self::Elevated,
            121..=130 => Self::High,
            _ => Self::Abnormal,
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slow => "Slow heart rate",
            Self::Normal => "Normal heart rate",
            Self::Elevated => "Fast heart rate",
            Self::High => "Very fast heart rate",
            Self::Abnormal => "Abnormal result (>130 BPM)",
        }
    }

    /// What to do next given this reading
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::Slow => "Try downward dog, tree pose, or jumping jacks.",
            Self::Normal => "You're ready for squats or push-ups.",
            Self::Elevated => "Take a moment to relax.",
            Self::High => "Rest and avoid strenuous exercise for now.",
            Self::Abnormal => "Unusual result. Please measure again.",
        }
    }
}

/// One finished measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateReading {
    /// Estimated beats per minute
    pub bpm: u32,
    /// Classification of `bpm`
    pub status: HeartRateStatus,
    /// Accepted samples the estimate was drawn from
    pub samples: usize,
}

/// Accumulates frame samples and estimates the pulse
#[derive(Debug, Clone)]
pub struct HeartRateEstimator {
    config: HeartRateConfig,
    samples: VecDeque<f64>,
    accepted: usize,
    rejected: usize,
}

impl HeartRateEstimator {
    /// Estimator with the given settings
    #[must_use]
    pub fn new(config: HeartRateConfig) -> Self {
        let capacity = config.window_samples.max(config.min_samples);
        Self {
            config,
            samples: VecDeque::with_capacity(capacity),
            accepted: 0,
            rejected: 0,
        }
    }

    /// Add one frame mean; returns whether it was kept
    pub fn push_sample(&mut self, value: f64) -> bool {
        if !(value > 0.0 && value < 255.0) {
            self.rejected += 1;
            return false;
        }
        let capacity = self.config.window_samples.max(self.config.min_samples);
        if self.samples.len() == capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
        self.accepted += 1;
        true
    }

    /// Sample a luma frame and add it
    pub fn push_frame(&mut self, luma: &[u8], width: usize, height: usize) -> bool {
        self.push_sample(sample_frame(luma, width, height))
    }

    /// Samples accepted since creation
    #[must_use]
    pub const fn accepted(&self) -> usize {
        self.accepted
    }

    /// Samples rejected as saturated or dark
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Estimate from the most recent samples
    #[must_use]
    pub fn estimate(&self) -> Option<HeartRateReading> {
        let recent: Vec<f64> = self.samples.iter().copied().collect();
        let bpm = estimate_bpm(&recent, &self.config)?;
        Some(HeartRateReading {
            bpm,
            status: HeartRateStatus::classify(bpm),
            samples: self.accepted,
        })
    }
}

/// Estimate BPM from a series of accepted frame means
///
/// Returns `None` when there are too few samples, too few clean peaks, or the
/// result falls outside the plausible range.
#[must_use]
pub fn estimate_bpm(samples: &[f64], config: &HeartRateConfig) -> Option<u32> {
    if samples.len() < config.min_samples {
        debug!(
            samples = samples.len(),
            required = config.min_samples,
            "Not enough heart-rate samples"
        );
        return None;
    }

    let window = &samples[samples.len().saturating_sub(config.window_samples)..];
    let smoothed = moving_average(window, config.smoothing_window);
    let filtered = high_pass(&smoothed, config.high_pass_alpha);
    let peaks = find_peaks(&filtered, config);

    if peaks.len() < config.min_peaks {
        debug!(peaks = peaks.len(), "Too few pulse peaks");
        return None;
    }

    let intervals: Vec<usize> = peaks
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|interval| (config.min_interval..=config.max_interval).contains(interval))
        .collect();
    if intervals.len() < 2 {
        debug!(intervals = intervals.len(), "Too few plausible beat intervals");
        return None;
    }

    let mean_interval = intervals.iter().sum::<usize>() as f64 / intervals.len() as f64;
    let bpm = (60.0 * config.sample_rate_fps / mean_interval).round();
    if !bpm.is_finite() || bpm < 0.0 {
        return None;
    }
    let bpm = bpm as u32;

    (config.min_bpm..=config.max_bpm)
        .contains(&bpm)
        .then_some(bpm)
}

/// Centred moving average; the window shrinks at the edges
fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(values.len() - 1);
            let span = &values[start..=end];
            span.iter().sum::<f64>() / span.len() as f64
        })
        .collect()
}

/// First-order high-pass: y[i] = alpha * (y[i-1] + x[i] - x[i-1])
fn high_pass(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut filtered = Vec::with_capacity(values.len());
    let mut previous_output = 0.0;
    let mut previous_input = values.first().copied().unwrap_or_default();
    for &value in values {
        let output = alpha * (previous_output + value - previous_input);
        filtered.push(output);
        previous_output = output;
        previous_input = value;
    }
    filtered
}

fn find_peaks(values: &[f64], config: &HeartRateConfig) -> Vec<usize> {
    let reach = config.peak_neighborhood;
    if values.len() <= 2 * reach {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let mean_abs_dev = values.iter().map(|v| (v - mean).abs()).sum::<f64>() / values.len() as f64;
    let threshold = config.peak_threshold_factor.mul_add(mean_abs_dev, mean);

    let mut peaks: Vec<usize> = Vec::new();
    for i in reach..values.len() - reach {
        let current = values[i];
        let dominates = (i - reach..=i + reach)
            .filter(|&j| j != i)
            .all(|j| current > values[j]);
        let far_enough = peaks
            .last()
            .map_or(true, |&last| i - last >= config.min_peak_distance);
        if current > threshold && dominates && far_enough {
            peaks.push(i);
        }
    }
    peaks
}
