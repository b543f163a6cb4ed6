// ABOUTME: Rough calorie estimate for a finished set from repetitions and duration
// ABOUTME: Per-exercise base cost per repetition scaled by a capped reps-per-minute intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use keepy_core::models::Exercise;

/// Upper bound of the intensity multiplier
pub const MAX_INTENSITY_FACTOR: f32 = 2.0;

/// Approximate kcal burned per repetition
#[must_use]
pub const fn base_calories_per_rep(exercise: Exercise) -> f32 {
    match exercise {
        Exercise::PushUp => 0.35,
        Exercise::Squat => 0.4,
        Exercise::JumpingJack => 0.5,
        Exercise::Plank | Exercise::TreePose => 0.3,
    }
}

/// Reps per minute capped at [`MAX_INTENSITY_FACTOR`]; 1.0 for a zero-length set
#[must_use]
pub fn intensity_factor(reps: u32, duration_seconds: u32) -> f32 {
    if duration_seconds == 0 {
        return 1.0;
    }
    let minutes = duration_seconds as f32 / 60.0;
    (reps as f32 / minutes).min(MAX_INTENSITY_FACTOR)
}

/// Estimated kcal for `reps` repetitions performed over `duration_seconds`
#[must_use]
pub fn estimate_calories(exercise: Exercise, reps: u32, duration_seconds: u32) -> f32 {
    reps as f32 * base_calories_per_rep(exercise) * intensity_factor(reps, duration_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_capped() {
        // 30 reps in 60 s is 30 reps/min, capped at 2
        let kcal = estimate_calories(Exercise::JumpingJack, 30, 60);
        assert!((kcal - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_slow_set_scales_down() {
        // 1 rep per minute over 10 minutes
        let kcal = estimate_calories(Exercise::Squat, 10, 600);
        assert!((kcal - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_uses_unit_intensity() {
        let kcal = estimate_calories(Exercise::PushUp, 20, 0);
        assert!((kcal - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_reps_no_calories() {
        assert!(estimate_calories(Exercise::TreePose, 0, 120).abs() < f32::EPSILON);
    }
}
