// ABOUTME: Squat form rules: knees past toes, shallow depth, wide stance, and ideal knee angle
// ABOUTME: Requires both hips, knees, and ankles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::config::SquatThresholds;
use keepy_core::geometry::{angle, distance};
use keepy_core::models::{FormCheck, PoseLandmark, PoseView};

pub(super) fn check(pose: &PoseView<'_>, limits: &SquatThresholds) -> Vec<FormCheck> {
    let (
        Some(left_hip),
        Some(right_hip),
        Some(left_knee),
        Some(right_knee),
        Some(left_ankle),
        Some(right_ankle),
    ) = (
        pose.get(PoseLandmark::LeftHip),
        pose.get(PoseLandmark::RightHip),
        pose.get(PoseLandmark::LeftKnee),
        pose.get(PoseLandmark::RightKnee),
        pose.get(PoseLandmark::LeftAnkle),
        pose.get(PoseLandmark::RightAnkle),
    )
    else {
        return Vec::new();
    };

    let mut checks = Vec::new();

    if left_knee.x > left_ankle.x + limits.knee_over_toe_margin
        || right_knee.x > right_ankle.x + limits.knee_over_toe_margin
    {
        checks.push(FormCheck::KneeForward);
    }

    let hip_y = (left_hip.y + right_hip.y) / 2.0;
    let knee_y = (left_knee.y + right_knee.y) / 2.0;
    if hip_y < knee_y - limits.depth_margin {
        checks.push(FormCheck::ShallowSquat);
    }

    let stance = (left_ankle.x - right_ankle.x).abs();
    if stance > distance(left_hip, right_hip) * limits.max_stance_ratio {
        checks.push(FormCheck::StanceTooWide);
    }

    let ideal = limits.ideal_knee_min..=limits.ideal_knee_max;
    let in_ideal = |deg: Option<f64>| deg.is_some_and(|deg| ideal.contains(&deg));
    if in_ideal(angle(left_hip, left_knee, left_ankle))
        && in_ideal(angle(right_hip, right_knee, right_ankle))
    {
        checks.push(FormCheck::PerfectSquatDepth);
    }

    checks
}
