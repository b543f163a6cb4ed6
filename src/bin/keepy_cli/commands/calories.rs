// ABOUTME: Calorie estimate command for keepy-cli
// ABOUTME: Prints the estimate for a set together with the factors it was built from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use keepy_fitness::core::models::Exercise;
use keepy_fitness::intelligence::calories::{
    base_calories_per_rep, estimate_calories, intensity_factor,
};

/// Print the calorie estimate for one set
pub fn run(exercise: Exercise, reps: u32, duration_seconds: u32) {
    let kcal = estimate_calories(exercise, reps, duration_seconds);
    let unit = if exercise.is_hold() { "hold" } else { "rep" };
    println!("\n{exercise}: {reps} {unit}s in {duration_seconds} s");
    println!(
        "   Base: {:.2} kcal/{unit}",
        base_calories_per_rep(exercise)
    );
    println!(
        "   Intensity: x{:.2}",
        intensity_factor(reps, duration_seconds)
    );
    println!("   Estimate: {kcal:.1} kcal");
}
