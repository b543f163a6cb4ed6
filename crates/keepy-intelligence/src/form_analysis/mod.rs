// ABOUTME: Per-frame form analysis dispatching to exercise-specific rule sets
// ABOUTME: Pure function of exercise and landmark snapshot producing qualitative feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Form Analysis
//!
//! Each exercise has a fixed set of geometric rules. A rule whose required
//! landmarks are missing (or below the configured confidence) is skipped, and
//! a rule whose angle is undefined because two joints coincide never fires.
//! Analysis never fails: the worst case is an empty feedback list.
//!
//! Feedback items carry the snapshot's capture timestamp so that the same
//! frame always yields identical output.

mod jumping_jack;
mod plank;
mod push_up;
mod squat;
mod tree_pose;

use crate::config::FormAnalysisConfig;
use keepy_core::models::{Exercise, FormCheck, FormFeedback, LandmarkSnapshot};
use rayon::prelude::*;
use std::collections::HashMap;

/// Rule-based form analyzer for all supported exercises
#[derive(Debug, Clone, Default)]
pub struct FormAnalyzer {
    config: FormAnalysisConfig,
}

impl FormAnalyzer {
    /// Analyzer using the given thresholds
    #[must_use]
    pub const fn new(config: FormAnalysisConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &FormAnalysisConfig {
        &self.config
    }

    /// Rules that fire for `exercise` on this frame, in evaluation order
    #[must_use]
    pub fn checks(&self, exercise: Exercise, snapshot: &LandmarkSnapshot) -> Vec<FormCheck> {
        let pose = snapshot.visible(self.config.min_landmark_confidence);
        match exercise {
            Exercise::PushUp => push_up::check(&pose, &self.config.push_up),
            Exercise::Squat => squat::check(&pose, &self.config.squat),
            Exercise::JumpingJack => jumping_jack::check(&pose, &self.config.jumping_jack),
            Exercise::Plank => plank::check(&pose, &self.config.plank),
            Exercise::TreePose => tree_pose::check(&pose, &self.config.tree_pose),
        }
    }

    /// Feedback for one frame of `exercise`
    ///
    /// Frames without a capture timestamp produce feedback stamped `0`.
    #[must_use]
    pub fn analyze(&self, exercise: Exercise, snapshot: &LandmarkSnapshot) -> Vec<FormFeedback> {
        let timestamp = snapshot.timestamp_ms().unwrap_or_default();
        self.checks(exercise, snapshot)
            .into_iter()
            .map(|check| FormFeedback::from_check(check, timestamp))
            .collect()
    }

    /// Feedback for a persisted exercise id; unknown ids yield no feedback
    #[must_use]
    pub fn analyze_by_id(&self, exercise_id: i64, snapshot: &LandmarkSnapshot) -> Vec<FormFeedback> {
        Exercise::from_id(exercise_id)
            .map(|exercise| self.analyze(exercise, snapshot))
            .unwrap_or_default()
    }

    /// Analyze a recorded sequence of frames in parallel, preserving frame order
    #[must_use]
    pub fn analyze_batch(
        &self,
        exercise: Exercise,
        frames: &[LandmarkSnapshot],
    ) -> Vec<Vec<FormFeedback>> {
        frames
            .par_iter()
            .map(|frame| self.analyze(exercise, frame))
            .collect()
    }

    /// How many frames of a recording fired each rule
    #[must_use]
    pub fn check_counts(
        &self,
        exercise: Exercise,
        frames: &[LandmarkSnapshot],
    ) -> HashMap<FormCheck, usize> {
        frames
            .par_iter()
            .fold(HashMap::new, |mut counts, frame| {
                for check in self.checks(exercise, frame) {
                    *counts.entry(check).or_insert(0) += 1;
                }
                counts
            })
            .reduce(HashMap::new, |mut merged, partial| {
                for (check, count) in partial {
                    *merged.entry(check).or_insert(0) += count;
                }
                merged
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepy_core::models::{Landmark, PoseLandmark};

    fn plank_pose(hip_y: f64) -> LandmarkSnapshot {
        LandmarkSnapshot::new()
            .with_point(PoseLandmark::LeftShoulder, 100.0, 300.0)
            .with_point(PoseLandmark::RightShoulder, 110.0, 300.0)
            .with_point(PoseLandmark::LeftHip, 250.0, hip_y)
            .with_point(PoseLandmark::RightHip, 260.0, hip_y)
            .with_point(PoseLandmark::LeftAnkle, 400.0, 310.0)
            .with_point(PoseLandmark::RightAnkle, 410.0, 310.0)
            .with_timestamp(42)
    }

    #[test]
    fn test_plank_direction_specific_message() {
        let analyzer = FormAnalyzer::default();
        assert_eq!(
            analyzer.checks(Exercise::Plank, &plank_pose(360.0)),
            vec![FormCheck::HipSag]
        );
        assert_eq!(
            analyzer.checks(Exercise::Plank, &plank_pose(240.0)),
            vec![FormCheck::HipHigh]
        );
        assert_eq!(
            analyzer.checks(Exercise::Plank, &plank_pose(305.0)),
            vec![FormCheck::StraightPlank]
        );
    }

    #[test]
    fn test_missing_landmark_skips_all_rules() {
        let mut pose = plank_pose(360.0);
        pose.remove(PoseLandmark::RightAnkle);
        assert!(FormAnalyzer::default().analyze(Exercise::Plank, &pose).is_empty());
    }

    #[test]
    fn test_low_confidence_landmark_treated_as_missing() {
        let mut config = FormAnalysisConfig::default();
        config.min_landmark_confidence = 0.5;
        let pose = plank_pose(360.0).with_landmark(
            PoseLandmark::LeftHip,
            Landmark::new(250.0, 360.0).with_confidence(0.2),
        );
        assert!(FormAnalyzer::new(config).analyze(Exercise::Plank, &pose).is_empty());
    }

    #[test]
    fn test_feedback_carries_frame_timestamp() {
        let feedback = FormAnalyzer::default().analyze(Exercise::Plank, &plank_pose(360.0));
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].timestamp, 42);
        assert_eq!(feedback[0].exercise_id, 4);
    }

    #[test]
    fn test_batch_preserves_order_and_counts() {
        let analyzer = FormAnalyzer::default();
        let frames = vec![plank_pose(360.0), plank_pose(305.0), plank_pose(360.0)];
        let batch = analyzer.analyze_batch(Exercise::Plank, &frames);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[1][0].check, FormCheck::StraightPlank);

        let counts = analyzer.check_counts(Exercise::Plank, &frames);
        assert_eq!(counts.get(&FormCheck::HipSag), Some(&2));
        assert_eq!(counts.get(&FormCheck::StraightPlank), Some(&1));
    }

    #[test]
    fn test_unknown_id_yields_nothing() {
        let analyzer = FormAnalyzer::default();
        assert!(analyzer.analyze_by_id(0, &plank_pose(360.0)).is_empty());
        assert!(analyzer.analyze_by_id(99, &plank_pose(360.0)).is_empty());
        assert_eq!(analyzer.analyze_by_id(4, &plank_pose(360.0)).len(), 1);
    }
}
