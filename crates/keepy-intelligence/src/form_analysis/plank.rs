// ABOUTME: Plank form rules: hips dropped or piked relative to the shoulder line
// ABOUTME: Requires both shoulders, hips, and ankles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::config::PlankThresholds;
use keepy_core::models::{FormCheck, PoseLandmark, PoseView};

pub(super) fn check(pose: &PoseView<'_>, limits: &PlankThresholds) -> Vec<FormCheck> {
    let (
        Some(left_shoulder),
        Some(right_shoulder),
        Some(left_hip),
        Some(right_hip),
        Some(left_ankle),
        Some(right_ankle),
    ) = (
        pose.get(PoseLandmark::LeftShoulder),
        pose.get(PoseLandmark::RightShoulder),
        pose.get(PoseLandmark::LeftHip),
        pose.get(PoseLandmark::RightHip),
        pose.get(PoseLandmark::LeftAnkle),
        pose.get(PoseLandmark::RightAnkle),
    )
    else {
        return Vec::new();
    };

    let mut checks = Vec::new();
    let shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
    let hip_y = (left_hip.y + right_hip.y) / 2.0;
    let ankle_y = (left_ankle.y + right_ankle.y) / 2.0;

    let hip_offset = (hip_y - shoulder_y).abs();
    let ankle_offset = (ankle_y - shoulder_y).abs();

    if hip_offset > limits.max_hip_offset {
        // y grows downward: a larger hip y means the hips hang below the shoulders
        checks.push(if hip_y > shoulder_y {
            FormCheck::HipSag
        } else {
            FormCheck::HipHigh
        });
    }

    if hip_offset < limits.straight_tolerance && ankle_offset < limits.straight_tolerance {
        checks.push(FormCheck::StraightPlank);
    }

    checks
}
