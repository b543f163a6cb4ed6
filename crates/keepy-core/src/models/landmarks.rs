// ABOUTME: Per-frame skeletal landmark snapshot produced by the external pose estimator
// ABOUTME: Fixed joint enumeration, optional positions with confidence, and JSON frame format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of joints tracked by a [`LandmarkSnapshot`]
pub const LANDMARK_COUNT: usize = 17;

/// Joints consumed by the exercise analyzers
///
/// A subset of the 33-point BlazePose topology used by ML Kit and `MediaPipe`;
/// fingers, heels, and foot indices are not needed by any check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLandmark {
    /// Nose tip
    Nose,
    /// Left eye center
    LeftEye,
    /// Right eye center
    RightEye,
    /// Left ear
    LeftEar,
    /// Right ear
    RightEar,
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
    /// Left knee
    LeftKnee,
    /// Right knee
    RightKnee,
    /// Left ankle
    LeftAnkle,
    /// Right ankle
    RightAnkle,
}

impl PoseLandmark {
    /// Every tracked joint in slot order
    pub const ALL: [Self; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    const fn slot(self) -> usize {
        self as usize
    }

    /// Index of this joint in the 33-point BlazePose landmark array
    #[must_use]
    pub const fn model_index(self) -> usize {
        match self {
            Self::Nose => 0,
            Self::LeftEye => 2,
            Self::RightEye => 5,
            Self::LeftEar => 7,
            Self::RightEar => 8,
            Self::LeftShoulder => 11,
            Self::RightShoulder => 12,
            Self::LeftElbow => 13,
            Self::RightElbow => 14,
            Self::LeftWrist => 15,
            Self::RightWrist => 16,
            Self::LeftHip => 23,
            Self::RightHip => 24,
            Self::LeftKnee => 25,
            Self::RightKnee => 26,
            Self::LeftAnkle => 27,
            Self::RightAnkle => 28,
        }
    }

    /// Joint for a BlazePose landmark index, if it is one we track
    #[must_use]
    pub fn from_model_index(index: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|landmark| landmark.model_index() == index)
    }

    /// Snake-case joint name as used in recorded frames
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

/// Position in the coordinate space of the source video frame (pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Relative depth, when the estimator provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    /// 2D point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn full_confidence() -> f32 {
    1.0
}

/// A single detected joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Joint position
    #[serde(flatten)]
    pub position: Point,
    /// In-frame likelihood reported by the estimator (0.0-1.0)
    #[serde(default = "full_confidence")]
    pub confidence: f32,
}

impl Landmark {
    /// Landmark with full confidence
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            confidence: 1.0,
        }
    }

    /// Override the reported confidence
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Named joint positions for one processed video frame
///
/// Created once per frame by the pose estimator, read by the analyzers and the
/// rep counter, then dropped. Lookups never fail: an absent, non-finite, or
/// low-confidence joint is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord", into = "SnapshotRecord")]
pub struct LandmarkSnapshot {
    timestamp_ms: Option<i64>,
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
}

impl LandmarkSnapshot {
    /// Empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a full BlazePose-indexed landmark array, keeping the tracked joints
    #[must_use]
    pub fn from_model_output(landmarks: &[Landmark]) -> Self {
        let mut snapshot = Self::new();
        for (index, landmark) in landmarks.iter().enumerate() {
            if let Some(joint) = PoseLandmark::from_model_index(index) {
                snapshot.insert(joint, *landmark);
            }
        }
        snapshot
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_landmark(mut self, joint: PoseLandmark, landmark: Landmark) -> Self {
        self.insert(joint, landmark);
        self
    }

    /// Builder-style insert of a full-confidence point
    #[must_use]
    pub fn with_point(self, joint: PoseLandmark, x: f64, y: f64) -> Self {
        self.with_landmark(joint, Landmark::new(x, y))
    }

    /// Attach the capture timestamp (epoch milliseconds)
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Set or replace a joint
    pub fn insert(&mut self, joint: PoseLandmark, landmark: Landmark) {
        self.landmarks[joint.slot()] = Some(landmark);
    }

    /// Remove a joint, e.g. to simulate an occluded frame
    pub fn remove(&mut self, joint: PoseLandmark) -> Option<Landmark> {
        self.landmarks[joint.slot()].take()
    }

    /// Raw landmark as reported, regardless of confidence
    #[must_use]
    pub fn get(&self, joint: PoseLandmark) -> Option<&Landmark> {
        self.landmarks[joint.slot()].as_ref()
    }

    /// Position of a present joint with finite coordinates
    #[must_use]
    pub fn point(&self, joint: PoseLandmark) -> Option<Point> {
        self.get(joint)
            .map(|landmark| landmark.position)
            .filter(Point::is_finite)
    }

    /// View that hides joints below `min_confidence`
    #[must_use]
    pub const fn visible(&self, min_confidence: f32) -> PoseView<'_> {
        PoseView {
            snapshot: self,
            min_confidence,
        }
    }

    /// Capture timestamp, when the estimator supplied one
    #[must_use]
    pub const fn timestamp_ms(&self) -> Option<i64> {
        self.timestamp_ms
    }

    /// Number of joints present
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.iter().flatten().count()
    }

    /// True when no joint was detected at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }
}

/// Confidence-filtered read access to a snapshot
#[derive(Debug, Clone, Copy)]
pub struct PoseView<'a> {
    snapshot: &'a LandmarkSnapshot,
    min_confidence: f32,
}

impl PoseView<'_> {
    /// Position of a joint that is present, finite, and confident enough
    #[must_use]
    pub fn get(&self, joint: PoseLandmark) -> Option<Point> {
        let landmark = self.snapshot.get(joint)?;
        if landmark.confidence >= self.min_confidence {
            self.snapshot.point(joint)
        } else {
            None
        }
    }
}

/// Wire format: `{"timestamp_ms": 1, "landmarks": {"left_wrist": {"x": 1, "y": 2}}}`
#[derive(Serialize, Deserialize)]
struct SnapshotRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp_ms: Option<i64>,
    #[serde(default)]
    landmarks: BTreeMap<PoseLandmark, Landmark>,
}

impl From<SnapshotRecord> for LandmarkSnapshot {
    fn from(record: SnapshotRecord) -> Self {
        let mut snapshot = Self {
            timestamp_ms: record.timestamp_ms,
            ..Self::default()
        };
        for (joint, landmark) in record.landmarks {
            snapshot.insert(joint, landmark);
        }
        snapshot
    }
}

impl From<LandmarkSnapshot> for SnapshotRecord {
    fn from(snapshot: LandmarkSnapshot) -> Self {
        let landmarks = PoseLandmark::ALL
            .into_iter()
            .filter_map(|joint| snapshot.get(joint).map(|landmark| (joint, *landmark)))
            .collect();
        Self {
            timestamp_ms: snapshot.timestamp_ms,
            landmarks,
        }
    }
}
