// ABOUTME: Heart-rate command for keepy-cli
// ABOUTME: Runs the fingertip camera estimator over a file of per-frame brightness means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use std::path::Path;

use anyhow::{bail, Result};
use keepy_fitness::config::AppConfig;
use keepy_fitness::intelligence::heart_rate::HeartRateEstimator;
use keepy_fitness::recording::read_samples;
use tracing::{info, warn};

/// Estimate heart rate from recorded samples
pub async fn run(config: &AppConfig, samples_path: &Path, fps: Option<f64>) -> Result<()> {
    let mut heart_rate = config.heart_rate.clone();
    if let Some(fps) = fps {
        if !(fps.is_finite() && fps > 0.0) {
            bail!("Frame rate must be positive, got {fps}");
        }
        heart_rate.sample_rate_fps = fps;
    }

    let samples = read_samples(samples_path).await?;
    let mut estimator = HeartRateEstimator::new(heart_rate);
    for sample in &samples {
        estimator.push_sample(*sample);
    }
    if estimator.rejected() > 0 {
        warn!(
            rejected = estimator.rejected(),
            "Dropped saturated or dark samples"
        );
    }

    let reading = estimator.estimate();
    info!(
        samples = samples.len(),
        accepted = estimator.accepted(),
        bpm = reading.as_ref().map(|r| r.bpm),
        "Heart-rate estimate"
    );
    crate::helpers::display::display_heart_rate(reading.as_ref(), samples.len());
    Ok(())
}
