// ABOUTME: Jumping jack form rules: arm height, arm synchronisation, and leg spread
// ABOUTME: Requires both wrists, ankles, and shoulders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::config::JumpingJackThresholds;
use keepy_core::geometry::distance;
use keepy_core::models::{FormCheck, PoseLandmark, PoseView};

pub(super) fn check(pose: &PoseView<'_>, limits: &JumpingJackThresholds) -> Vec<FormCheck> {
    let (
        Some(left_wrist),
        Some(right_wrist),
        Some(left_ankle),
        Some(right_ankle),
        Some(left_shoulder),
        Some(right_shoulder),
    ) = (
        pose.get(PoseLandmark::LeftWrist),
        pose.get(PoseLandmark::RightWrist),
        pose.get(PoseLandmark::LeftAnkle),
        pose.get(PoseLandmark::RightAnkle),
        pose.get(PoseLandmark::LeftShoulder),
        pose.get(PoseLandmark::RightShoulder),
    )
    else {
        return Vec::new();
    };

    let mut checks = Vec::new();
    let shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
    let wrist_y = (left_wrist.y + right_wrist.y) / 2.0;

    if wrist_y > shoulder_y - limits.arms_raised_margin {
        checks.push(FormCheck::ArmsLow);
    }

    if (left_wrist.y - right_wrist.y).abs() > limits.max_wrist_height_diff {
        checks.push(FormCheck::TimingOff);
    }

    let feet = distance(left_ankle, right_ankle);
    let shoulders = distance(left_shoulder, right_shoulder);
    if feet < shoulders * limits.min_stance_ratio {
        checks.push(FormCheck::FeetNarrow);
    }

    if wrist_y < shoulder_y - limits.full_extension_margin
        && feet > shoulders * limits.full_extension_stance_ratio
    {
        checks.push(FormCheck::GoodJumpingJack);
    }

    checks
}
