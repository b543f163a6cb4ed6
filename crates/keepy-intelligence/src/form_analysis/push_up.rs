// ABOUTME: Push-up form rules: elbow flare, sagging back, uneven hands, and ideal elbow depth
// ABOUTME: Requires both shoulders, elbows, wrists, and hips; a knee is optional for the back check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::config::PushUpThresholds;
use keepy_core::geometry::{angle, distance};
use keepy_core::models::{FormCheck, PoseLandmark, PoseView};

pub(super) fn check(pose: &PoseView<'_>, limits: &PushUpThresholds) -> Vec<FormCheck> {
    let (
        Some(left_shoulder),
        Some(right_shoulder),
        Some(left_elbow),
        Some(right_elbow),
        Some(left_wrist),
        Some(right_wrist),
        Some(left_hip),
        Some(_right_hip),
    ) = (
        pose.get(PoseLandmark::LeftShoulder),
        pose.get(PoseLandmark::RightShoulder),
        pose.get(PoseLandmark::LeftElbow),
        pose.get(PoseLandmark::RightElbow),
        pose.get(PoseLandmark::LeftWrist),
        pose.get(PoseLandmark::RightWrist),
        pose.get(PoseLandmark::LeftHip),
        pose.get(PoseLandmark::RightHip),
    )
    else {
        return Vec::new();
    };

    let mut checks = Vec::new();
    let left_elbow_angle = angle(left_shoulder, left_elbow, left_wrist);
    let right_elbow_angle = angle(right_shoulder, right_elbow, right_wrist);

    let opened = |deg: Option<f64>| deg.is_some_and(|deg| deg > limits.flare_elbow_angle);
    if opened(left_elbow_angle) || opened(right_elbow_angle) {
        // Reach is measured on the left arm only
        let reach = distance(left_wrist, left_shoulder);
        let upper_arm = distance(left_elbow, left_shoulder);
        if reach > upper_arm * limits.flare_reach_ratio {
            checks.push(FormCheck::ElbowFlare);
        }
    }

    let knee = pose
        .get(PoseLandmark::LeftKnee)
        .or_else(|| pose.get(PoseLandmark::RightKnee));
    if let Some(knee) = knee {
        if angle(left_shoulder, left_hip, knee).is_some_and(|deg| deg < limits.min_torso_angle) {
            checks.push(FormCheck::BackSag);
        }
    }

    if (left_wrist.y - right_wrist.y).abs() > limits.max_wrist_height_diff {
        checks.push(FormCheck::UnevenHands);
    }

    let ideal = limits.ideal_elbow_min..=limits.ideal_elbow_max;
    let in_ideal = |deg: Option<f64>| deg.is_some_and(|deg| ideal.contains(&deg));
    if in_ideal(left_elbow_angle) && in_ideal(right_elbow_angle) {
        checks.push(FormCheck::ExcellentElbowAngle);
    }

    checks
}
