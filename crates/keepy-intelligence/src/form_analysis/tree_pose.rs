// ABOUTME: Tree pose form rules: leg lift, standing-leg straightness, shoulder level, and hand position
// ABOUTME: Requires both ankles, knees, hips, and shoulders; wrists are optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::config::TreePoseThresholds;
use keepy_core::geometry::safe_angle;
use keepy_core::models::{FormCheck, Point, PoseLandmark, PoseView};

struct Leg {
    hip: Point,
    knee: Point,
    ankle: Point,
}

pub(super) fn check(pose: &PoseView<'_>, limits: &TreePoseThresholds) -> Vec<FormCheck> {
    let (
        Some(left_ankle),
        Some(right_ankle),
        Some(left_knee),
        Some(right_knee),
        Some(left_hip),
        Some(right_hip),
        Some(left_shoulder),
        Some(right_shoulder),
    ) = (
        pose.get(PoseLandmark::LeftAnkle),
        pose.get(PoseLandmark::RightAnkle),
        pose.get(PoseLandmark::LeftKnee),
        pose.get(PoseLandmark::RightKnee),
        pose.get(PoseLandmark::LeftHip),
        pose.get(PoseLandmark::RightHip),
        pose.get(PoseLandmark::LeftShoulder),
        pose.get(PoseLandmark::RightShoulder),
    )
    else {
        return Vec::new();
    };

    let mut checks = Vec::new();

    if (left_ankle.y - right_ankle.y).abs() < limits.lifted_ankle_min_dy {
        checks.push(FormCheck::NoLegLifted);
    }

    let left = Leg {
        hip: left_hip,
        knee: left_knee,
        ankle: left_ankle,
    };
    let right = Leg {
        hip: right_hip,
        knee: right_knee,
        ankle: right_ankle,
    };
    // The higher ankle (smaller y) belongs to the lifted leg; level ankles lift neither
    let lifted_and_support = if left_ankle.y < right_ankle.y {
        Some((&left, &right))
    } else if right_ankle.y < left_ankle.y {
        Some((&right, &left))
    } else {
        None
    };

    if let Some((_, support)) = lifted_and_support {
        if safe_angle(support.hip, support.knee, support.ankle) < limits.min_support_leg_angle {
            checks.push(FormCheck::BentSupportLeg);
        }
    }

    if (left_shoulder.y - right_shoulder.y).abs() > limits.max_shoulder_tilt {
        checks.push(FormCheck::UnevenShoulders);
    }

    if let (Some(left_wrist), Some(right_wrist)) = (
        pose.get(PoseLandmark::LeftWrist),
        pose.get(PoseLandmark::RightWrist),
    ) {
        let raised = left_wrist.y < left_shoulder.y && right_wrist.y < right_shoulder.y;
        let joined = (left_wrist.y - right_wrist.y).abs() < limits.max_wrist_height_diff;
        if !(raised && joined) {
            checks.push(FormCheck::HandsNotRaised);
        }
    }

    if let Some((lifted, support)) = lifted_and_support {
        if (lifted.knee.y - support.hip.y).abs() > limits.max_lifted_knee_drop {
            checks.push(FormCheck::LiftedFootLow);
        }
    }

    checks
}
