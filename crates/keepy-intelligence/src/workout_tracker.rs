// ABOUTME: Per-session frame pipeline combining rep counting, form analysis, scoring, and narration
// ABOUTME: Owns the session state and produces the history record when the workout finishes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Workout Tracker
//!
//! One tracker per workout. Every frame goes through the rep counter and the
//! form analyzer; the result is a [`FrameReport`] for the UI and a handful of
//! [`CoachingEvent`]s for the narrator. Frames arrive in order on a single
//! thread, so the tracker is plain `&mut self` state.

use crate::calories::estimate_calories;
use crate::coaching::{CoachingEvent, CoachingNarrator, Milestone};
use crate::config::FormAnalysisConfig;
use crate::form_analysis::FormAnalyzer;
use crate::quality_score::{score_feedback, QualityBand};
use crate::rep_counter::{RepCounter, RepPhase};
use chrono::{DateTime, Utc};
use keepy_core::models::{
    Exercise, FeedbackType, FormFeedback, LandmarkSnapshot, WorkoutHistory,
    WorkoutSession,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// What the UI needs after each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Repetitions completed so far
    pub count: u32,
    /// Form feedback for this frame
    pub feedback: Vec<FormFeedback>,
    /// Quality score for this frame (0-100)
    pub quality_score: u8,
    /// Whether this frame completed a repetition
    pub rep_completed: bool,
    /// Phase after this frame
    pub phase: RepPhase,
}

/// Aggregate figures for a session so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Exercise performed
    pub exercise: Exercise,
    /// Repetitions completed
    pub count: u32,
    /// Repetition goal
    pub target_count: u16,
    /// Frames processed
    pub frames: u64,
    /// Frames in which the estimator found no person
    pub empty_frames: u64,
    /// Mean quality score over frames with a detected person
    pub average_quality: Option<f64>,
}

/// Drives one workout from start to finish
pub struct WorkoutTracker {
    analyzer: FormAnalyzer,
    counter: RepCounter,
    session: WorkoutSession,
    narrator: Arc<dyn CoachingNarrator>,
    frames: u64,
    empty_frames: u64,
    quality_total: u64,
}

impl WorkoutTracker {
    /// Start a workout and announce it
    #[must_use]
    pub fn start(
        exercise: Exercise,
        target_count: u16,
        config: FormAnalysisConfig,
        narrator: Arc<dyn CoachingNarrator>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let counter = RepCounter::new(exercise, &config);
        info!(
            exercise = %exercise,
            target_count,
            "Workout session started"
        );
        narrator.announce(&CoachingEvent::ExerciseStart {
            exercise,
            target_count,
        });
        Self {
            analyzer: FormAnalyzer::new(config),
            counter,
            session: WorkoutSession::new(exercise, target_count, started_at),
            narrator,
            frames: 0,
            empty_frames: 0,
            quality_total: 0,
        }
    }

    /// Run one frame through counting, analysis, and narration
    pub fn process_frame(&mut self, snapshot: &LandmarkSnapshot) -> FrameReport {
        self.frames += 1;
        let exercise = self.session.exercise;

        let mut feedback = self.analyzer.analyze(exercise, snapshot);
        if snapshot.timestamp_ms().is_none() {
            let now = Utc::now().timestamp_millis();
            for item in &mut feedback {
                item.timestamp = now;
            }
        }
        let quality_score = score_feedback(&feedback);

        if snapshot.is_empty() {
            self.empty_frames += 1;
        } else {
            self.quality_total += u64::from(quality_score);
        }

        self.narrate_feedback(&feedback);

        let rep_completed = self.counter.update(snapshot);
        if rep_completed {
            self.on_rep(quality_score);
        }

        FrameReport {
            count: self.counter.count(),
            feedback,
            quality_score,
            rep_completed,
            phase: self.counter.phase(),
        }
    }

    /// Most severe correction of the frame, if any, goes to the narrator
    fn narrate_feedback(&self, feedback: &[FormFeedback]) {
        let Some(worst) = feedback
            .iter()
            .filter(|item| !item.is_positive())
            .max_by_key(|item| item.severity)
        else {
            return;
        };

        let event = if worst.feedback_type == FeedbackType::SafetyWarning {
            CoachingEvent::SafetyWarning { check: worst.check }
        } else {
            CoachingEvent::FormError { check: worst.check }
        };
        self.narrator.announce(&event);
    }

    fn on_rep(&mut self, quality_score: u8) {
        let reached_target = self.session.record_rep();
        let count = self.counter.count();

        self.narrator.announce(&CoachingEvent::RepCount { count });
        self.narrator.announce(&CoachingEvent::FormQuality {
            band: QualityBand::classify(quality_score),
        });

        if reached_target {
            info!(exercise = %self.session.exercise, count, "Target reached");
            self.narrator
                .announce(&CoachingEvent::WorkoutComplete { count });
        } else if let Some(milestone) =
            Milestone::for_progress(count, u32::from(self.session.target_count))
        {
            debug!(?milestone, count, "Progress milestone");
            self.narrator
                .announce(&CoachingEvent::ProgressMilestone { milestone });
        }
    }

    /// Repetitions completed so far
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.counter.count()
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &WorkoutSession {
        &self.session
    }

    /// Aggregate figures so far
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let scored = self.frames - self.empty_frames;
        SessionSummary {
            exercise: self.session.exercise,
            count: self.counter.count(),
            target_count: self.session.target_count,
            frames: self.frames,
            empty_frames: self.empty_frames,
            average_quality: (scored > 0).then(|| self.quality_total as f64 / scored as f64),
        }
    }

    /// End the workout and produce its history record
    ///
    /// A repetition still in progress is not counted.
    #[must_use]
    pub fn finish(self, finished_at: DateTime<Utc>) -> WorkoutHistory {
        let duration = self.session.elapsed_seconds(finished_at);
        let calories = estimate_calories(
            self.session.exercise,
            u32::from(self.session.current_count),
            duration,
        );
        let history = self.session.into_history(finished_at, calories);
        info!(
            exercise = %history.exercise_name,
            count = history.count,
            target_count = history.target_count,
            duration_seconds = history.duration_seconds,
            calories = history.calories_burned,
            "Workout session finished"
        );
        history
    }
}
