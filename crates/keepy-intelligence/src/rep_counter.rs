// ABOUTME: Two-phase repetition counter with per-exercise hysteresis on landmark metrics
// ABOUTME: Counts one repetition per full Rest -> Active -> Rest cycle, ignoring unusable frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Repetition Counting
//!
//! Every frame is reduced to a [`PhaseSignal`]. Between the "active" and
//! "rest" thresholds lies a dead band that yields [`PhaseSignal::Hold`], so
//! jitter around a single threshold cannot double count.
//!
//! | Exercise | Metric | Active | Rest |
//! |---|---|---|---|
//! | Push-up | mean elbow angle | below 90 | above 160 |
//! | Squat | mean knee angle | below 100 | above 160 |
//! | Jumping jack | wrists vs shoulders, ankle spread | arms up, spread > 1.5x shoulders | arms down, spread < 1.2x |
//! | Plank | hip rise above shoulders | above 80 px (downward dog) | within 40 px (plank) |
//! | Tree pose | ankle height difference | above 50 px | below 50 px |

use crate::config::{FormAnalysisConfig, RepCounterThresholds};
use keepy_core::geometry::{angle, distance};
use keepy_core::models::{Exercise, LandmarkSnapshot, Point, PoseLandmark, PoseView};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Position within a repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    /// Starting position (arms extended, standing, plank, both feet down)
    #[default]
    Rest,
    /// Working position (bottom of the push-up or squat, arms up, downward dog, leg lifted)
    Active,
}

/// What a single frame says about the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseSignal {
    /// Frame is clearly in the starting position
    Rest,
    /// Frame is clearly in the working position
    Active,
    /// Frame is between the two thresholds
    Hold,
}

/// Phase signal for one frame, or `None` when the needed landmarks are unusable
#[must_use]
pub fn phase_signal(
    exercise: Exercise,
    pose: &PoseView<'_>,
    limits: &RepCounterThresholds,
) -> Option<PhaseSignal> {
    match exercise {
        Exercise::PushUp => {
            let elbow = mean_joint_angle(
                pose,
                [
                    (PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow, PoseLandmark::LeftWrist),
                    (PoseLandmark::RightShoulder, PoseLandmark::RightElbow, PoseLandmark::RightWrist),
                ],
            )?;
            Some(band(
                elbow < limits.push_up_active_below,
                elbow > limits.push_up_rest_above,
            ))
        }
        Exercise::Squat => {
            let knee = mean_joint_angle(
                pose,
                [
                    (PoseLandmark::LeftHip, PoseLandmark::LeftKnee, PoseLandmark::LeftAnkle),
                    (PoseLandmark::RightHip, PoseLandmark::RightKnee, PoseLandmark::RightAnkle),
                ],
            )?;
            Some(band(
                knee < limits.squat_active_below,
                knee > limits.squat_rest_above,
            ))
        }
        Exercise::JumpingJack => {
            let shoulders = pair(pose, PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder)?;
            let wrists = pair(pose, PoseLandmark::LeftWrist, PoseLandmark::RightWrist)?;
            let ankles = pair(pose, PoseLandmark::LeftAnkle, PoseLandmark::RightAnkle)?;

            let shoulder_width = distance(shoulders.0, shoulders.1);
            let spread = distance(ankles.0, ankles.1);
            let shoulder_y = mean_y(shoulders);
            let wrist_y = mean_y(wrists);

            Some(band(
                wrist_y < shoulder_y
                    && spread > shoulder_width * limits.jumping_jack_active_stance_ratio,
                wrist_y > shoulder_y
                    && spread < shoulder_width * limits.jumping_jack_rest_stance_ratio,
            ))
        }
        Exercise::Plank => {
            let shoulder_y = mean_y(pair(
                pose,
                PoseLandmark::LeftShoulder,
                PoseLandmark::RightShoulder,
            )?);
            let hip_y = mean_y(pair(pose, PoseLandmark::LeftHip, PoseLandmark::RightHip)?);
            let hip_rise = shoulder_y - hip_y;
            Some(band(
                hip_rise > limits.plank_active_hip_rise,
                hip_rise.abs() < limits.plank_rest_tolerance,
            ))
        }
        Exercise::TreePose => {
            let (left, right) = pair(pose, PoseLandmark::LeftAnkle, PoseLandmark::RightAnkle)?;
            let dy = (left.y - right.y).abs();
            Some(band(
                dy > limits.tree_pose_ankle_dy,
                dy < limits.tree_pose_ankle_dy,
            ))
        }
    }
}

const fn band(active: bool, rest: bool) -> PhaseSignal {
    match (active, rest) {
        (true, _) => PhaseSignal::Active,
        (false, true) => PhaseSignal::Rest,
        (false, false) => PhaseSignal::Hold,
    }
}

fn pair(pose: &PoseView<'_>, left: PoseLandmark, right: PoseLandmark) -> Option<(Point, Point)> {
    Some((pose.get(left)?, pose.get(right)?))
}

fn mean_y((a, b): (Point, Point)) -> f64 {
    (a.y + b.y) / 2.0
}

/// Mean of the joint angles on the sides where the angle is defined
fn mean_joint_angle(
    pose: &PoseView<'_>,
    sides: [(PoseLandmark, PoseLandmark, PoseLandmark); 2],
) -> Option<f64> {
    let angles: Vec<f64> = sides
        .iter()
        .filter_map(|&(a, b, c)| angle(pose.get(a)?, pose.get(b)?, pose.get(c)?))
        .collect();
    if angles.is_empty() {
        return None;
    }
    Some(angles.iter().sum::<f64>() / angles.len() as f64)
}

/// Per-session repetition counter
#[derive(Debug, Clone)]
pub struct RepCounter {
    exercise: Exercise,
    thresholds: RepCounterThresholds,
    min_confidence: f32,
    phase: RepPhase,
    count: u32,
}

impl RepCounter {
    /// Counter for `exercise` using the thresholds from `config`
    #[must_use]
    pub fn new(exercise: Exercise, config: &FormAnalysisConfig) -> Self {
        Self {
            exercise,
            thresholds: config.rep_counter.clone(),
            min_confidence: config.min_landmark_confidence,
            phase: RepPhase::Rest,
            count: 0,
        }
    }

    /// Feed one frame; returns `true` when it completes a repetition
    pub fn update(&mut self, snapshot: &LandmarkSnapshot) -> bool {
        let pose = snapshot.visible(self.min_confidence);
        let Some(signal) = phase_signal(self.exercise, &pose, &self.thresholds) else {
            return false;
        };
        self.apply(signal)
    }

    /// Advance the state machine with an already computed signal
    pub fn apply(&mut self, signal: PhaseSignal) -> bool {
        match (self.phase, signal) {
            (RepPhase::Rest, PhaseSignal::Active) => {
                self.phase = RepPhase::Active;
                debug!(exercise = %self.exercise, "Entered active phase");
                false
            }
            (RepPhase::Active, PhaseSignal::Rest) => {
                self.phase = RepPhase::Rest;
                self.count = self.count.saturating_add(1);
                debug!(exercise = %self.exercise, count = self.count, "Repetition completed");
                true
            }
            _ => false,
        }
    }

    /// Back to the starting position with no repetitions
    pub fn reset(&mut self) {
        self.phase = RepPhase::Rest;
        self.count = 0;
    }

    /// Completed repetitions
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> RepPhase {
        self.phase
    }

    /// Exercise being counted
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        self.exercise
    }
}
