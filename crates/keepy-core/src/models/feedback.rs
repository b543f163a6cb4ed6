// ABOUTME: Form feedback records emitted by the per-exercise analyzers
// ABOUTME: Feedback type, severity, and the catalogue of rule codes with their coaching messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use super::exercise::Exercise;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a form observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    /// Body position needs adjusting
    PostureCorrection,
    /// Movement is too shallow or too narrow
    RangeOfMotion,
    /// Limbs are out of sync
    Timing,
    /// Left/right symmetry or placement is off
    Alignment,
    /// Position risks injury
    SafetyWarning,
}

/// How urgently a feedback item should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSeverity {
    /// General information, including positive reinforcement
    Info,
    /// Minor correction
    Warning,
    /// Fix immediately
    Critical,
}

impl FeedbackSeverity {
    /// Default quality-score deduction for one item of this severity
    #[must_use]
    pub const fn default_weight(self) -> u32 {
        match self {
            Self::Info => 5,
            Self::Warning => 10,
            Self::Critical => 20,
        }
    }
}

/// Identifies the rule that produced a feedback item
///
/// Every check has a fixed exercise, category, severity, and message, so
/// analyzers only decide *whether* a check fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FormCheck {
    /// Push-up: elbows flared away from the body
    ElbowFlare,
    /// Push-up: torso bent at the hips
    BackSag,
    /// Push-up: hands at different heights
    UnevenHands,
    /// Push-up: both elbows between 45 and 90 degrees
    ExcellentElbowAngle,
    /// Squat: knee travelling past the toes
    KneeForward,
    /// Squat: hips not low enough
    ShallowSquat,
    /// Squat: feet wider than the hips allow
    StanceTooWide,
    /// Squat: both knees between 80 and 100 degrees
    PerfectSquatDepth,
    /// Jumping jack: hands not raised overhead
    ArmsLow,
    /// Jumping jack: arms moving at different heights
    TimingOff,
    /// Jumping jack: feet not spread past shoulder width
    FeetNarrow,
    /// Jumping jack: full extension of arms and legs
    GoodJumpingJack,
    /// Plank: hips dropped below the shoulder line
    HipSag,
    /// Plank: hips piked above the shoulder line
    HipHigh,
    /// Plank: shoulders, hips, and ankles level
    StraightPlank,
    /// Tree pose: both feet still on the ground
    NoLegLifted,
    /// Tree pose: standing leg bent
    BentSupportLeg,
    /// Tree pose: shoulders tilted
    UnevenShoulders,
    /// Tree pose: hands neither joined nor raised
    HandsNotRaised,
    /// Tree pose: lifted foot resting too low on the standing leg
    LiftedFootLow,
}

impl FormCheck {
    /// Exercise the check belongs to
    #[must_use]
    pub const fn exercise(self) -> Exercise {
        match self {
            Self::ElbowFlare | Self::BackSag | Self::UnevenHands | Self::ExcellentElbowAngle => {
                Exercise::PushUp
            }
            Self::KneeForward | Self::ShallowSquat | Self::StanceTooWide | Self::PerfectSquatDepth => {
                Exercise::Squat
            }
            Self::ArmsLow | Self::TimingOff | Self::FeetNarrow | Self::GoodJumpingJack => {
                Exercise::JumpingJack
            }
            Self::HipSag | Self::HipHigh | Self::StraightPlank => Exercise::Plank,
            Self::NoLegLifted
            | Self::BentSupportLeg
            | Self::UnevenShoulders
            | Self::HandsNotRaised
            | Self::LiftedFootLow => Exercise::TreePose,
        }
    }

    /// Category reported with the check
    #[must_use]
    pub const fn feedback_type(self) -> FeedbackType {
        match self {
            Self::KneeForward => FeedbackType::SafetyWarning,
            Self::ShallowSquat | Self::ArmsLow | Self::FeetNarrow => FeedbackType::RangeOfMotion,
            Self::TimingOff => FeedbackType::Timing,
            Self::UnevenHands
            | Self::StanceTooWide
            | Self::NoLegLifted
            | Self::UnevenShoulders
            | Self::LiftedFootLow => FeedbackType::Alignment,
            Self::ElbowFlare
            | Self::BackSag
            | Self::ExcellentElbowAngle
            | Self::PerfectSquatDepth
            | Self::GoodJumpingJack
            | Self::HipSag
            | Self::HipHigh
            | Self::StraightPlank
            | Self::BentSupportLeg
            | Self::HandsNotRaised => FeedbackType::PostureCorrection,
        }
    }

    /// Severity reported with the check
    #[must_use]
    pub const fn severity(self) -> FeedbackSeverity {
        match self {
            Self::BackSag | Self::KneeForward | Self::HipSag | Self::HipHigh => {
                FeedbackSeverity::Critical
            }
            Self::ElbowFlare
            | Self::UnevenHands
            | Self::ShallowSquat
            | Self::StanceTooWide
            | Self::ArmsLow
            | Self::TimingOff
            | Self::FeetNarrow
            | Self::BentSupportLeg
            | Self::UnevenShoulders
            | Self::LiftedFootLow => FeedbackSeverity::Warning,
            Self::ExcellentElbowAngle
            | Self::PerfectSquatDepth
            | Self::GoodJumpingJack
            | Self::StraightPlank
            | Self::NoLegLifted
            | Self::HandsNotRaised => FeedbackSeverity::Info,
        }
    }

    /// On-screen message for the check
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ElbowFlare => "Elbows are flaring out, keep them close to your body",
            Self::BackSag => "Keep your back straight, don't arch or sag.",
            Self::UnevenHands => "Hands are not level, place them evenly.",
            Self::ExcellentElbowAngle => "Excellent elbow angle!",
            Self::KneeForward => "Knees are going past your toes, push your hips back.",
            Self::ShallowSquat => "Squat is not deep enough, go lower.",
            Self::StanceTooWide => "Feet are too wide, bring them closer together.",
            Self::PerfectSquatDepth => "Perfect squat angle.",
            Self::ArmsLow => "Raise your arms higher, above your head.",
            Self::TimingOff => "Raise both arms together.",
            Self::FeetNarrow => "Spread your legs wider than your shoulders.",
            Self::GoodJumpingJack => "Perfect form.",
            Self::HipSag => "Hips are too low, lift your hips",
            Self::HipHigh => "Hips are too high, lower your hips.",
            Self::StraightPlank => "Great, keep your body straight.",
            Self::NoLegLifted => "Lift one leg to get into tree pose",
            Self::BentSupportLeg => "Standing leg is bent, stand up straighter",
            Self::UnevenShoulders => "Keep your shoulders level and your back straight",
            Self::HandsNotRaised => "Join your hands together or raise them overhead",
            Self::LiftedFootLow => "Place the lifted foot near your inner thigh or calf",
        }
    }

    /// Whether the check is positive reinforcement rather than a correction
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(
            self,
            Self::ExcellentElbowAngle
                | Self::PerfectSquatDepth
                | Self::GoodJumpingJack
                | Self::StraightPlank
        )
    }
}

impl fmt::Display for FormCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single form observation produced by one analysis call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFeedback {
    /// Persisted id of the analyzed exercise
    pub exercise_id: u16,
    /// Category of the observation
    pub feedback_type: FeedbackType,
    /// Human-readable message
    pub message: String,
    /// Urgency
    pub severity: FeedbackSeverity,
    /// Epoch milliseconds of the analyzed frame
    pub timestamp: i64,
    /// Rule that fired
    pub check: FormCheck,
}

impl FormFeedback {
    /// Feedback item for a fired check on a frame captured at `timestamp`
    #[must_use]
    pub fn from_check(check: FormCheck, timestamp: i64) -> Self {
        Self {
            exercise_id: check.exercise().id(),
            feedback_type: check.feedback_type(),
            message: check.message().to_owned(),
            severity: check.severity(),
            timestamp,
            check,
        }
    }

    /// Whether this item is positive reinforcement
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.check.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_check_copies_rule_metadata() {
        let feedback = FormFeedback::from_check(FormCheck::KneeForward, 1_700_000_000_000);
        assert_eq!(feedback.exercise_id, 2);
        assert_eq!(feedback.feedback_type, FeedbackType::SafetyWarning);
        assert_eq!(feedback.severity, FeedbackSeverity::Critical);
        assert_eq!(feedback.timestamp, 1_700_000_000_000);
        assert!(!feedback.is_positive());
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(FeedbackSeverity::Critical.default_weight(), 20);
        assert_eq!(FeedbackSeverity::Warning.default_weight(), 10);
        assert_eq!(FeedbackSeverity::Info.default_weight(), 5);
        assert!(FeedbackSeverity::Critical > FeedbackSeverity::Info);
    }

    #[test]
    fn test_positive_checks_are_info() {
        for check in [
            FormCheck::ExcellentElbowAngle,
            FormCheck::PerfectSquatDepth,
            FormCheck::GoodJumpingJack,
            FormCheck::StraightPlank,
        ] {
            assert!(check.is_positive());
            assert_eq!(check.severity(), FeedbackSeverity::Info);
        }
    }
}
