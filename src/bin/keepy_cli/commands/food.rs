// ABOUTME: Food calorie command for keepy-cli
// ABOUTME: Looks up a recognised food label and prints the calorie estimate with advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use keepy_fitness::intelligence::food_calories::{FoodEstimate, FOOD_CALORIES};
use tracing::debug;

/// Print the calorie estimate for a food label
pub fn run(label: &str) {
    let known = FOOD_CALORIES
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(label.trim()));
    if !known {
        debug!(label, "Unknown food label, using the default estimate");
    }
    println!("\n{}", FoodEstimate::for_label(label));
}
