// ABOUTME: Integration tests for per-exercise form analysis and quality scoring
// ABOUTME: Uses synthetic poses with exact joint angles to pin down which rules fire
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use keepy_fitness::core::models::{
    Exercise, FeedbackSeverity, FeedbackType, FormCheck, FormFeedback, Landmark,
    LandmarkSnapshot, PoseLandmark,
};
use keepy_fitness::intelligence::config::FormAnalysisConfig;
use keepy_fitness::intelligence::quality_score::{score, score_feedback};
use keepy_fitness::intelligence::FormAnalyzer;

fn checks(exercise: Exercise, snapshot: &LandmarkSnapshot) -> Vec<FormCheck> {
    FormAnalyzer::default().checks(exercise, snapshot)
}

#[test]
fn test_good_push_up_gets_single_praise() {
    common::init_test_logging();
    let analyzer = FormAnalyzer::default();
    let frame = common::push_up_pose(70.0);

    let feedback = analyzer.analyze(Exercise::PushUp, &frame);
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].check, FormCheck::ExcellentElbowAngle);
    assert_eq!(feedback[0].message, "Excellent elbow angle!");
    assert_eq!(feedback[0].severity, FeedbackSeverity::Info);
    assert_eq!(feedback[0].exercise_id, 1);

    assert_eq!(score(&analyzer, Exercise::PushUp, &frame), 95);
}

#[test]
fn test_straight_arms_read_as_flared() {
    // Reach is twice the upper arm once the elbow opens past 90 degrees
    assert_eq!(
        checks(Exercise::PushUp, &common::push_up_pose(120.0)),
        vec![FormCheck::ElbowFlare]
    );
}

#[test]
fn test_push_up_sagging_back_and_uneven_hands() {
    let frame = common::push_up_pose(70.0)
        .with_point(PoseLandmark::LeftKnee, 300.0, 600.0)
        .with_point(PoseLandmark::RightWrist, 331.0, 500.0);
    let found = checks(Exercise::PushUp, &frame);
    assert!(found.contains(&FormCheck::BackSag));
    assert!(found.contains(&FormCheck::UnevenHands));
}

#[test]
fn test_push_up_uses_right_knee_when_left_is_missing() {
    let mut frame = common::push_up_pose(70.0);
    frame.remove(PoseLandmark::LeftKnee);
    let frame = frame.with_point(PoseLandmark::RightKnee, 300.0, 600.0);
    assert!(checks(Exercise::PushUp, &frame).contains(&FormCheck::BackSag));
}

#[test]
fn test_knee_past_toes_is_a_critical_safety_warning() {
    let analyzer = FormAnalyzer::default();
    let frame = common::standing_with_knee_forward(50.0);

    let feedback = analyzer.analyze(Exercise::Squat, &frame);
    let knee = feedback
        .iter()
        .find(|item| item.check == FormCheck::KneeForward)
        .expect("knee warning");
    assert_eq!(knee.feedback_type, FeedbackType::SafetyWarning);
    assert_eq!(knee.severity, FeedbackSeverity::Critical);
    assert!(score(&analyzer, Exercise::Squat, &frame) <= 80);
}

#[test]
fn test_knee_within_margin_is_fine() {
    let found = checks(Exercise::Squat, &common::standing_with_knee_forward(20.0));
    assert!(!found.contains(&FormCheck::KneeForward));
    assert!(found.contains(&FormCheck::ShallowSquat));
}

#[test]
fn test_squat_depth() {
    assert_eq!(
        checks(Exercise::Squat, &common::squat_pose(180.0)),
        vec![FormCheck::ShallowSquat]
    );
    assert_eq!(
        checks(Exercise::Squat, &common::squat_pose(90.0)),
        vec![FormCheck::PerfectSquatDepth]
    );
}

#[test]
fn test_squat_stance_too_wide() {
    let frame = common::standing_with_knee_forward(0.0)
        .with_point(PoseLandmark::LeftAnkle, 200.0, 600.0)
        .with_point(PoseLandmark::LeftKnee, 200.0, 500.0)
        .with_point(PoseLandmark::RightAnkle, 500.0, 600.0);
    assert!(checks(Exercise::Squat, &frame).contains(&FormCheck::StanceTooWide));
}

#[test]
fn test_jumping_jack_positions() {
    assert_eq!(
        checks(Exercise::JumpingJack, &common::jumping_jack_pose(true)),
        vec![FormCheck::GoodJumpingJack]
    );
    assert_eq!(
        checks(Exercise::JumpingJack, &common::jumping_jack_pose(false)),
        vec![FormCheck::ArmsLow, FormCheck::FeetNarrow]
    );
}

#[test]
fn test_jumping_jack_arms_out_of_sync() {
    let frame = common::jumping_jack_pose(true).with_point(PoseLandmark::RightWrist, 450.0, 100.0);
    let found = checks(Exercise::JumpingJack, &frame);
    assert!(found.contains(&FormCheck::TimingOff));
}

#[test]
fn test_plank_hip_direction() {
    assert_eq!(
        checks(Exercise::Plank, &common::plank_pose(0.0)),
        vec![FormCheck::StraightPlank]
    );
    assert_eq!(
        checks(Exercise::Plank, &common::plank_pose(-60.0)),
        vec![FormCheck::HipSag]
    );
    assert_eq!(
        checks(Exercise::Plank, &common::plank_pose(120.0)),
        vec![FormCheck::HipHigh]
    );
}

#[test]
fn test_tree_pose_feet_together_asks_to_lift_a_leg() {
    let analyzer = FormAnalyzer::default();
    let feedback = analyzer.analyze(Exercise::TreePose, &common::tree_pose(10.0));

    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].check, FormCheck::NoLegLifted);
    assert_eq!(feedback[0].severity, FeedbackSeverity::Info);
    assert!(feedback[0].message.to_lowercase().contains("lift one leg"));
    assert!(!feedback
        .iter()
        .any(|item| item.check == FormCheck::BentSupportLeg));
}

#[test]
fn test_tree_pose_bent_support_leg() {
    // Left foot lifted, right (support) knee pushed out sideways
    let frame = common::tree_pose(120.0).with_point(PoseLandmark::RightKnee, 460.0, 500.0);
    let found = checks(Exercise::TreePose, &frame);
    assert!(found.contains(&FormCheck::BentSupportLeg));
    assert!(!found.contains(&FormCheck::NoLegLifted));
}

#[test]
fn test_tree_pose_slightly_raised_foot_still_judges_support_leg() {
    // 10 px is below the lift threshold but still picks the left leg as lifted
    let frame = common::tree_pose(10.0).with_point(PoseLandmark::RightKnee, 460.0, 500.0);
    let found = checks(Exercise::TreePose, &frame);
    assert!(found.contains(&FormCheck::NoLegLifted));
    assert!(found.contains(&FormCheck::BentSupportLeg));
}

#[test]
fn test_tree_pose_level_ankles_never_flag_support_leg() {
    // Level ankles lift neither leg, so no support leg is judged
    let frame = common::tree_pose(0.0).with_point(PoseLandmark::RightKnee, 460.0, 500.0);
    assert_eq!(
        checks(Exercise::TreePose, &frame),
        vec![FormCheck::NoLegLifted]
    );
}

#[test]
fn test_tree_pose_hands() {
    let lowered = common::tree_pose(120.0)
        .with_point(PoseLandmark::LeftWrist, 300.0, 350.0)
        .with_point(PoseLandmark::RightWrist, 400.0, 350.0);
    assert_eq!(
        checks(Exercise::TreePose, &lowered),
        vec![FormCheck::HandsNotRaised]
    );

    let raised = common::tree_pose(120.0)
        .with_point(PoseLandmark::LeftWrist, 340.0, 100.0)
        .with_point(PoseLandmark::RightWrist, 360.0, 100.0);
    assert!(checks(Exercise::TreePose, &raised).is_empty());
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = FormAnalyzer::default();
    let frames = [
        (Exercise::PushUp, common::push_up_pose(120.0)),
        (Exercise::Squat, common::standing_with_knee_forward(50.0)),
        (Exercise::TreePose, common::tree_pose(10.0)),
    ];
    for (exercise, frame) in &frames {
        let frame = frame.clone().with_timestamp(1_700_000_000_000);
        assert_eq!(
            analyzer.analyze(*exercise, &frame),
            analyzer.analyze(*exercise, &frame)
        );
    }
}

#[test]
fn test_unknown_exercise_id_yields_no_feedback() {
    let analyzer = FormAnalyzer::default();
    let frame = common::push_up_pose(120.0);
    assert!(analyzer.analyze_by_id(-1, &frame).is_empty());
    assert!(analyzer.analyze_by_id(6, &frame).is_empty());
    assert_eq!(analyzer.analyze_by_id(1, &frame).len(), 1);
}

#[test]
fn test_missing_landmark_means_no_feedback() {
    let mut frame = common::push_up_pose(120.0);
    frame.remove(PoseLandmark::RightHip);
    assert!(checks(Exercise::PushUp, &frame).is_empty());
    assert!(checks(Exercise::Squat, &frame).is_empty());
}

#[test]
fn test_confidence_floor_hides_joints() {
    let frame = common::plank_pose(-60.0).with_landmark(
        PoseLandmark::LeftShoulder,
        Landmark::new(100.0, 300.0).with_confidence(0.3),
    );
    assert_eq!(checks(Exercise::Plank, &frame), vec![FormCheck::HipSag]);

    let config = FormAnalysisConfig {
        min_landmark_confidence: 0.5,
        ..FormAnalysisConfig::default()
    };
    assert!(FormAnalyzer::new(config)
        .checks(Exercise::Plank, &frame)
        .is_empty());
}

#[test]
fn test_score_is_monotonic_in_corrections() {
    let analyzer = FormAnalyzer::default();
    let mut feedback = analyzer.analyze(Exercise::Squat, &common::squat_pose(180.0));
    let mut previous = score_feedback(&feedback);
    for check in [
        FormCheck::KneeForward,
        FormCheck::StanceTooWide,
        FormCheck::KneeForward,
        FormCheck::KneeForward,
        FormCheck::KneeForward,
        FormCheck::KneeForward,
    ] {
        feedback.push(FormFeedback::from_check(check, 0));
        let current = score_feedback(&feedback);
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0);
}
