// ABOUTME: Severity-weighted 0-100 form quality score and its narration bands
// ABOUTME: Deducts per feedback item from a perfect score and floors at zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::form_analysis::FormAnalyzer;
use keepy_core::models::{Exercise, FormFeedback, LandmarkSnapshot};
use serde::{Deserialize, Serialize};

/// Score of a frame without any feedback
pub const PERFECT_SCORE: u8 = 100;

/// Aggregate feedback into a score: 100 minus the weight of every item, floored at 0
///
/// Weights are fixed per severity (critical 20, warning 10, info 5).
/// Positive reinforcement is an info item and still costs its weight.
#[must_use]
pub fn score_feedback(feedback: &[FormFeedback]) -> u8 {
    let deduction = feedback
        .iter()
        .map(|item| item.severity.default_weight())
        .fold(0_u32, u32::saturating_add);
    let remaining = u32::from(PERFECT_SCORE).saturating_sub(deduction);
    u8::try_from(remaining).unwrap_or(PERFECT_SCORE)
}

/// Analyze a frame and score it
#[must_use]
pub fn score(analyzer: &FormAnalyzer, exercise: Exercise, snapshot: &LandmarkSnapshot) -> u8 {
    let feedback = analyzer.analyze(exercise, snapshot);
    score_feedback(&feedback)
}

/// Coarse classification of a quality score used for spoken feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    /// Below 60
    Poor,
    /// 60-69
    NeedsWork,
    /// 70-79
    Fair,
    /// 80-89
    Good,
    /// 90 and above
    Excellent,
}

impl QualityBand {
    /// Band for a 0-100 score
    #[must_use]
    pub const fn classify(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Fair,
            60..=69 => Self::NeedsWork,
            _ => Self::Poor,
        }
    }
}
