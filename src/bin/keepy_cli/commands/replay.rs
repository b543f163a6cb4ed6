// ABOUTME: Replay command for keepy-cli
// ABOUTME: Feeds a recorded landmark session through the workout tracker and prints the coaching it would give
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use keepy_fitness::config::AppConfig;
use keepy_fitness::core::models::{Exercise, LandmarkSnapshot};
use keepy_fitness::history::{JsonLinesHistoryStore, WorkoutHistoryStore};
use keepy_fitness::intelligence::{FormAnalyzer, ThrottledNarrator, WorkoutTracker};
use keepy_fitness::logging::AppLogger;
use keepy_fitness::recording::read_frames;
use tracing::{debug, info};

use crate::helpers::display::{display_check_counts, display_session};
use crate::helpers::transcript::{ConsoleNarrator, TranscriptNarrator};

/// Frame spacing assumed for recordings without capture timestamps
const FALLBACK_FRAME_INTERVAL_MS: i64 = 33;

/// Replay settings from the command line
pub struct ReplayOptions {
    pub exercise: Exercise,
    pub target: u16,
    pub save: bool,
    pub reports: bool,
}

/// Capture time of frame `index`, relative to the first frame
fn frame_offset_ms(frames: &[LandmarkSnapshot], index: usize) -> i64 {
    let first = frames.first().and_then(LandmarkSnapshot::timestamp_ms);
    let current = frames.get(index).and_then(LandmarkSnapshot::timestamp_ms);
    match (first, current) {
        (Some(first), Some(current)) => (current - first).max(0),
        _ => i64::try_from(index)
            .unwrap_or(i64::MAX)
            .saturating_mul(FALLBACK_FRAME_INTERVAL_MS),
    }
}

fn wall_clock(frames: &[LandmarkSnapshot], index: usize, fallback: DateTime<Utc>) -> DateTime<Utc> {
    frames
        .first()
        .and_then(LandmarkSnapshot::timestamp_ms)
        .and_then(DateTime::from_timestamp_millis)
        .map_or(fallback, |start| {
            start + chrono::Duration::milliseconds(frame_offset_ms(frames, index))
        })
}

/// Replay a recording
pub async fn run(config: &AppConfig, recording: &Path, options: ReplayOptions) -> Result<()> {
    let parsed = read_frames(recording).await?;
    if parsed.frames.is_empty() {
        bail!("{} contains no readable frames", recording.display());
    }
    for (joint, seen) in parsed.joint_coverage() {
        debug!(joint = joint.name(), seen, "Joint coverage");
    }
    let frames = parsed.frames;
    info!(
        recording = %recording.display(),
        frames = frames.len(),
        skipped = parsed.skipped,
        "Replaying recording"
    );

    let transcript = Arc::new(TranscriptNarrator::default());
    let speaker = ThrottledNarrator::new(ConsoleNarrator, config.coaching.clone());
    let clock_origin = Instant::now();
    let started_at = wall_clock(&frames, 0, Utc::now());

    let mut tracker = WorkoutTracker::start(
        options.exercise,
        options.target,
        config.analysis.clone(),
        transcript.clone(),
        started_at,
    );

    // start announcement
    for event in transcript.drain() {
        speaker.announce_at(&event, clock_origin);
    }

    for (index, frame) in frames.iter().enumerate() {
        let report = tracker.process_frame(frame);
        if options.reports {
            println!("{}", serde_json::to_string(&report)?);
        }

        let offset = Duration::from_millis(u64::try_from(frame_offset_ms(&frames, index))?);
        for event in transcript.drain() {
            speaker.announce_at(&event, clock_origin + offset);
        }
    }

    let summary = tracker.summary();
    let finished_at = wall_clock(&frames, frames.len() - 1, Utc::now());
    let workout = tracker.finish(finished_at.max(started_at));

    display_session(&summary, &workout, parsed.skipped);
    let counts = FormAnalyzer::new(config.analysis.clone()).check_counts(options.exercise, &frames);
    display_check_counts(&counts, frames.len());

    AppLogger::log_replay(
        options.exercise.slug(),
        frames.len(),
        parsed.skipped,
        summary.count,
    );

    if options.save {
        let store = JsonLinesHistoryStore::new(&config.history_path);
        store.save(&workout).await?;
        println!("\nSaved workout {} to {}", workout.id, store.path().display());
    }

    Ok(())
}
