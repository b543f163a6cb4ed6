// ABOUTME: Exercise catalogue for pose-tracked workouts
// ABOUTME: Sum type over push-up, squat, jumping jack, plank, and tree pose with stable integer ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exercises the coach can count and critique
///
/// Integer ids (1-5) are the persisted form used in workout history records;
/// everything inside the engine dispatches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    /// Push-up, counted on the bottom-to-top cycle
    PushUp,
    /// Bodyweight squat
    Squat,
    /// Jumping jack
    JumpingJack,
    /// Plank, cycling into downward dog and back
    Plank,
    /// Tree pose (single-leg balance), counted per hold
    TreePose,
}

impl Exercise {
    /// All exercises in id order
    pub const ALL: [Self; 5] = [
        Self::PushUp,
        Self::Squat,
        Self::JumpingJack,
        Self::Plank,
        Self::TreePose,
    ];

    /// Persisted exercise id
    #[must_use]
    pub const fn id(self) -> u16 {
        match self {
            Self::PushUp => 1,
            Self::Squat => 2,
            Self::JumpingJack => 3,
            Self::Plank => 4,
            Self::TreePose => 5,
        }
    }

    /// Exercise for a persisted id; unknown ids yield `None`
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|exercise| i64::from(exercise.id()) == id)
    }

    /// Human-readable name stored in history records
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PushUp => "Push-ups",
            Self::Squat => "Squats",
            Self::JumpingJack => "Jumping Jacks",
            Self::Plank => "Plank to Downward Dog",
            Self::TreePose => "Tree Pose",
        }
    }

    /// Kebab-case identifier accepted on the command line
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PushUp => "push-up",
            Self::Squat => "squat",
            Self::JumpingJack => "jumping-jack",
            Self::Plank => "plank",
            Self::TreePose => "tree-pose",
        }
    }

    /// Whether a repetition is a held pose rather than a movement
    #[must_use]
    pub const fn is_hold(self) -> bool {
        matches!(self, Self::TreePose)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Exercise {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if let Ok(id) = normalized.parse::<i64>() {
            return Self::from_id(id)
                .ok_or_else(|| AppError::invalid_input(format!("Unknown exercise id: {id}")));
        }

        match normalized.as_str() {
            "pushup" | "pushups" => Ok(Self::PushUp),
            "squat" | "squats" => Ok(Self::Squat),
            "jumpingjack" | "jumpingjacks" => Ok(Self::JumpingJack),
            "plank" | "downwarddog" => Ok(Self::Plank),
            "treepose" | "tree" => Ok(Self::TreePose),
            _ => Err(AppError::invalid_input(format!(
                "Unknown exercise: '{s}'. Valid options: push-up, squat, jumping-jack, plank, tree-pose"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(Exercise::from_id(i64::from(exercise.id())), Some(exercise));
        }
        assert_eq!(Exercise::from_id(0), None);
        assert_eq!(Exercise::from_id(6), None);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("push-up".parse::<Exercise>().ok(), Some(Exercise::PushUp));
        assert_eq!("Jumping_Jack".parse::<Exercise>().ok(), Some(Exercise::JumpingJack));
        assert_eq!("5".parse::<Exercise>().ok(), Some(Exercise::TreePose));
        assert!("burpee".parse::<Exercise>().is_err());
        assert!("9".parse::<Exercise>().is_err());
    }

    #[test]
    fn test_only_tree_pose_is_held() {
        let held: Vec<Exercise> = Exercise::ALL.into_iter().filter(|e| e.is_hold()).collect();
        assert_eq!(held, vec![Exercise::TreePose]);
    }
}
