// ABOUTME: Integration tests for the food calorie lookup
// ABOUTME: Covers known labels, the unknown-label default, and advice bands
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use keepy_fitness::intelligence::food_calories::{
    calories_for, CalorieAdvice, FoodEstimate, DEFAULT_FOOD_CALORIES,
};

#[test]
fn test_known_labels() {
    assert_eq!(calories_for("Apple"), 52);
    assert_eq!(calories_for("Hot dog"), 290);
    assert_eq!(calories_for("Doughnut"), 452);
}

#[test]
fn test_label_matching_ignores_case_and_padding() {
    assert_eq!(calories_for("  french FRIES "), 312);
}

#[test]
fn test_unknown_label_uses_default() {
    assert_eq!(calories_for("Pho"), DEFAULT_FOOD_CALORIES);
    assert_eq!(calories_for(""), 200);
}

#[test]
fn test_estimate_grades_each_band() {
    assert_eq!(FoodEstimate::for_label("Orange").advice, CalorieAdvice::Light);
    assert_eq!(FoodEstimate::for_label("Pho").advice, CalorieAdvice::Moderate);
    assert_eq!(FoodEstimate::for_label("Pizza").advice, CalorieAdvice::High);
    assert_eq!(FoodEstimate::for_label("Doughnut").advice, CalorieAdvice::VeryHigh);
}

#[test]
fn test_estimate_display() {
    let text = FoodEstimate::for_label(" Banana ").to_string();
    assert!(text.contains("Food: Banana"));
    assert!(text.contains("~89 kcal"));
    assert!(text.contains(CalorieAdvice::Light.message()));
}
