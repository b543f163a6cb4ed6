// ABOUTME: Form analysis configuration with per-exercise rule thresholds and rep-counter hysteresis
// ABOUTME: Defaults reproduce the mobile app's pixel-space constants; KEEPY_* variables override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! Form Analysis Configuration
//!
//! Distances are in image pixels and angles in degrees. The pixel thresholds
//! were tuned for a phone camera at roughly 480x640, so a much larger or
//! smaller frame shifts their meaning; ratios (`*_ratio`) are scale-free.

use super::{apply_env_var, ConfigError};
use serde::{Deserialize, Serialize};

/// Thresholds for every exercise analyzer plus landmark filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAnalysisConfig {
    /// Push-up rule thresholds
    pub push_up: PushUpThresholds,
    /// Squat rule thresholds
    pub squat: SquatThresholds,
    /// Jumping jack rule thresholds
    pub jumping_jack: JumpingJackThresholds,
    /// Plank rule thresholds
    pub plank: PlankThresholds,
    /// Tree pose rule thresholds
    pub tree_pose: TreePoseThresholds,
    /// Phase thresholds for repetition counting
    pub rep_counter: RepCounterThresholds,
    /// Landmarks reported below this confidence are treated as absent (0.0-1.0)
    pub min_landmark_confidence: f32,
}

/// Push-up rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushUpThresholds {
    /// Elbow angle above which flare is checked (degrees)
    pub flare_elbow_angle: f64,
    /// Wrist-to-shoulder over elbow-to-shoulder distance that counts as flared
    pub flare_reach_ratio: f64,
    /// Shoulder-hip-knee angle below which the back is sagging (degrees)
    pub min_torso_angle: f64,
    /// Maximum vertical offset between the hands (pixels)
    pub max_wrist_height_diff: f64,
    /// Lower bound of the praised elbow angle range (degrees)
    pub ideal_elbow_min: f64,
    /// Upper bound of the praised elbow angle range (degrees)
    pub ideal_elbow_max: f64,
}

/// Squat rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquatThresholds {
    /// Horizontal distance the knee may travel past the ankle (pixels)
    pub knee_over_toe_margin: f64,
    /// Hips higher than knees by more than this are too shallow (pixels)
    pub depth_margin: f64,
    /// Maximum ankle spread relative to hip width
    pub max_stance_ratio: f64,
    /// Lower bound of the praised knee angle range (degrees)
    pub ideal_knee_min: f64,
    /// Upper bound of the praised knee angle range (degrees)
    pub ideal_knee_max: f64,
}

/// Jumping jack rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpingJackThresholds {
    /// Wrists must rise this far above the shoulders (pixels)
    pub arms_raised_margin: f64,
    /// Maximum vertical offset between the hands (pixels)
    pub max_wrist_height_diff: f64,
    /// Minimum ankle spread relative to shoulder width
    pub min_stance_ratio: f64,
    /// Wrist rise above the shoulders that earns praise (pixels)
    pub full_extension_margin: f64,
    /// Ankle spread relative to shoulder width that earns praise
    pub full_extension_stance_ratio: f64,
}

/// Plank rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlankThresholds {
    /// Hip offset from the shoulder line that is flagged (pixels)
    pub max_hip_offset: f64,
    /// Hip and ankle offsets below this are praised as straight (pixels)
    pub straight_tolerance: f64,
}

/// Tree pose rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePoseThresholds {
    /// Ankle height difference that means one leg is lifted (pixels)
    pub lifted_ankle_min_dy: f64,
    /// Hip-knee-ankle angle of the standing leg below which it is bent (degrees)
    pub min_support_leg_angle: f64,
    /// Maximum vertical offset between the shoulders (pixels)
    pub max_shoulder_tilt: f64,
    /// Maximum vertical offset between the hands when joined overhead (pixels)
    pub max_wrist_height_diff: f64,
    /// Maximum vertical gap between the lifted knee and the standing hip (pixels)
    pub max_lifted_knee_drop: f64,
}

/// Hysteresis bands for repetition phase detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepCounterThresholds {
    /// Mean elbow angle below which a push-up is at the bottom (degrees)
    pub push_up_active_below: f64,
    /// Mean elbow angle above which a push-up is back at the top (degrees)
    pub push_up_rest_above: f64,
    /// Mean knee angle below which a squat is at the bottom (degrees)
    pub squat_active_below: f64,
    /// Mean knee angle above which the squatter is standing (degrees)
    pub squat_rest_above: f64,
    /// Ankle spread over shoulder width for the open jumping-jack position
    pub jumping_jack_active_stance_ratio: f64,
    /// Ankle spread over shoulder width for the closed jumping-jack position
    pub jumping_jack_rest_stance_ratio: f64,
    /// Hip rise above the shoulder line that marks downward dog (pixels)
    pub plank_active_hip_rise: f64,
    /// Hip offset within which the body is back in plank (pixels)
    pub plank_rest_tolerance: f64,
    /// Ankle height difference that marks the tree pose as held (pixels)
    pub tree_pose_ankle_dy: f64,
}

impl Default for FormAnalysisConfig {
    fn default() -> Self {
        Self {
            push_up: PushUpThresholds::default(),
            squat: SquatThresholds::default(),
            jumping_jack: JumpingJackThresholds::default(),
            plank: PlankThresholds::default(),
            tree_pose: TreePoseThresholds::default(),
            rep_counter: RepCounterThresholds::default(),
            min_landmark_confidence: 0.0,
        }
    }
}

impl Default for PushUpThresholds {
    fn default() -> Self {
        Self {
            flare_elbow_angle: 90.0,
            flare_reach_ratio: 1.5,
            min_torso_angle: 160.0,
            max_wrist_height_diff: 50.0,
            ideal_elbow_min: 45.0,
            ideal_elbow_max: 90.0,
        }
    }
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self {
            knee_over_toe_margin: 30.0,
            depth_margin: 20.0,
            max_stance_ratio: 1.5,
            ideal_knee_min: 80.0,
            ideal_knee_max: 100.0,
        }
    }
}

impl Default for JumpingJackThresholds {
    fn default() -> Self {
        Self {
            arms_raised_margin: 20.0,
            max_wrist_height_diff: 40.0,
            min_stance_ratio: 1.2,
            full_extension_margin: 50.0,
            full_extension_stance_ratio: 1.5,
        }
    }
}

impl Default for PlankThresholds {
    fn default() -> Self {
        Self {
            max_hip_offset: 40.0,
            straight_tolerance: 30.0,
        }
    }
}

impl Default for TreePoseThresholds {
    fn default() -> Self {
        Self {
            lifted_ankle_min_dy: 50.0,
            min_support_leg_angle: 170.0,
            max_shoulder_tilt: 40.0,
            max_wrist_height_diff: 60.0,
            max_lifted_knee_drop: 250.0,
        }
    }
}

impl Default for RepCounterThresholds {
    fn default() -> Self {
        Self {
            push_up_active_below: 90.0,
            push_up_rest_above: 160.0,
            squat_active_below: 100.0,
            squat_rest_above: 160.0,
            jumping_jack_active_stance_ratio: 1.5,
            jumping_jack_rest_stance_ratio: 1.2,
            plank_active_hip_rise: 80.0,
            plank_rest_tolerance: 40.0,
            tree_pose_ankle_dy: 50.0,
        }
    }
}

impl FormAnalysisConfig {
    /// Load configuration from defaults and `KEEPY_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the resulting
    /// configuration is inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        apply_env_var(
            "KEEPY_MIN_LANDMARK_CONFIDENCE",
            &mut self.min_landmark_confidence,
        )?;

        // Push-up
        apply_env_var(
            "KEEPY_PUSH_UP_FLARE_ELBOW_ANGLE",
            &mut self.push_up.flare_elbow_angle,
        )?;
        apply_env_var(
            "KEEPY_PUSH_UP_MIN_TORSO_ANGLE",
            &mut self.push_up.min_torso_angle,
        )?;
        apply_env_var(
            "KEEPY_PUSH_UP_MAX_WRIST_HEIGHT_DIFF",
            &mut self.push_up.max_wrist_height_diff,
        )?;

        // Squat
        apply_env_var(
            "KEEPY_SQUAT_KNEE_OVER_TOE_MARGIN",
            &mut self.squat.knee_over_toe_margin,
        )?;
        apply_env_var("KEEPY_SQUAT_DEPTH_MARGIN", &mut self.squat.depth_margin)?;
        apply_env_var(
            "KEEPY_SQUAT_MAX_STANCE_RATIO",
            &mut self.squat.max_stance_ratio,
        )?;

        // Jumping jack
        apply_env_var(
            "KEEPY_JUMPING_JACK_ARMS_RAISED_MARGIN",
            &mut self.jumping_jack.arms_raised_margin,
        )?;
        apply_env_var(
            "KEEPY_JUMPING_JACK_MIN_STANCE_RATIO",
            &mut self.jumping_jack.min_stance_ratio,
        )?;

        // Plank
        apply_env_var("KEEPY_PLANK_MAX_HIP_OFFSET", &mut self.plank.max_hip_offset)?;
        apply_env_var(
            "KEEPY_PLANK_STRAIGHT_TOLERANCE",
            &mut self.plank.straight_tolerance,
        )?;

        // Tree pose
        apply_env_var(
            "KEEPY_TREE_POSE_LIFTED_ANKLE_MIN_DY",
            &mut self.tree_pose.lifted_ankle_min_dy,
        )?;
        apply_env_var(
            "KEEPY_TREE_POSE_MIN_SUPPORT_LEG_ANGLE",
            &mut self.tree_pose.min_support_leg_angle,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_landmark_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "min_landmark_confidence must be between 0.0 and 1.0",
            ));
        }

        if self.push_up.ideal_elbow_min >= self.push_up.ideal_elbow_max {
            return Err(ConfigError::InvalidRange(
                "push_up.ideal_elbow_min must be < push_up.ideal_elbow_max",
            ));
        }
        if self.squat.ideal_knee_min >= self.squat.ideal_knee_max {
            return Err(ConfigError::InvalidRange(
                "squat.ideal_knee_min must be < squat.ideal_knee_max",
            ));
        }

        let angles = [
            self.push_up.flare_elbow_angle,
            self.push_up.min_torso_angle,
            self.push_up.ideal_elbow_min,
            self.push_up.ideal_elbow_max,
            self.squat.ideal_knee_min,
            self.squat.ideal_knee_max,
            self.tree_pose.min_support_leg_angle,
            self.rep_counter.push_up_active_below,
            self.rep_counter.push_up_rest_above,
            self.rep_counter.squat_active_below,
            self.rep_counter.squat_rest_above,
        ];
        if angles.iter().any(|deg| !(0.0..=180.0).contains(deg)) {
            return Err(ConfigError::ValueOutOfRange(
                "joint angle thresholds must be between 0 and 180 degrees",
            ));
        }

        let ratios = [
            self.push_up.flare_reach_ratio,
            self.squat.max_stance_ratio,
            self.jumping_jack.min_stance_ratio,
            self.jumping_jack.full_extension_stance_ratio,
            self.rep_counter.jumping_jack_active_stance_ratio,
            self.rep_counter.jumping_jack_rest_stance_ratio,
        ];
        if ratios.iter().any(|ratio| !(ratio.is_finite() && *ratio > 0.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "stance and reach ratios must be positive",
            ));
        }

        let margins = [
            self.push_up.max_wrist_height_diff,
            self.squat.knee_over_toe_margin,
            self.squat.depth_margin,
            self.jumping_jack.arms_raised_margin,
            self.jumping_jack.max_wrist_height_diff,
            self.jumping_jack.full_extension_margin,
            self.plank.max_hip_offset,
            self.plank.straight_tolerance,
            self.tree_pose.lifted_ankle_min_dy,
            self.tree_pose.max_shoulder_tilt,
            self.tree_pose.max_wrist_height_diff,
            self.tree_pose.max_lifted_knee_drop,
            self.rep_counter.plank_active_hip_rise,
            self.rep_counter.plank_rest_tolerance,
        ];
        if margins.iter().any(|px| !(px.is_finite() && *px >= 0.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "pixel margins must be finite and non-negative",
            ));
        }

        self.validate_rep_counter()
    }

    fn validate_rep_counter(&self) -> Result<(), ConfigError> {
        let rep = &self.rep_counter;
        if rep.push_up_active_below >= rep.push_up_rest_above {
            return Err(ConfigError::InvalidRange(
                "push_up_active_below must be < push_up_rest_above",
            ));
        }
        if rep.squat_active_below >= rep.squat_rest_above {
            return Err(ConfigError::InvalidRange(
                "squat_active_below must be < squat_rest_above",
            ));
        }
        if rep.jumping_jack_rest_stance_ratio >= rep.jumping_jack_active_stance_ratio {
            return Err(ConfigError::InvalidRange(
                "jumping_jack_rest_stance_ratio must be < jumping_jack_active_stance_ratio",
            ));
        }
        if rep.plank_rest_tolerance >= rep.plank_active_hip_rise {
            return Err(ConfigError::InvalidRange(
                "plank_rest_tolerance must be < plank_active_hip_rise",
            ));
        }
        if !(rep.tree_pose_ankle_dy.is_finite() && rep.tree_pose_ankle_dy > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "tree_pose_ankle_dy must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(FormAnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_nan_ratio_rejected() {
        let mut config = FormAnalysisConfig::default();
        config.squat.max_stance_ratio = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_infinite_margin_rejected() {
        let mut config = FormAnalysisConfig::default();
        config.tree_pose.max_lifted_knee_drop = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_inverted_hysteresis_rejected() {
        let mut config = FormAnalysisConfig::default();
        config.rep_counter.squat_active_below = 170.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
