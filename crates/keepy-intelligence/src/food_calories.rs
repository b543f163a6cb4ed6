// ABOUTME: Calorie lookup for food labels produced by the on-device food classifier
// ABOUTME: Maps a label to kcal per serving and grades the result into eating advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kcal assumed for labels missing from the table
pub const DEFAULT_FOOD_CALORIES: u32 = 200;

/// Kcal per 100 g or one serving for every label the classifier emits
pub const FOOD_CALORIES: [(&str, u32); 15] = [
    ("Bread", 265),
    ("Pancake", 227),
    ("Waffle", 291),
    ("Bagel", 257),
    ("Muffin", 377),
    ("Doughnut", 452),
    ("Hamburger", 295),
    ("Pizza", 266),
    ("Sandwich", 250),
    ("Hot dog", 290),
    ("French fries", 312),
    ("Apple", 52),
    ("Orange", 47),
    ("Banana", 89),
    ("Grape", 69),
];

/// Kcal for a classifier label, [`DEFAULT_FOOD_CALORIES`] when unknown
///
/// Matching ignores ASCII case and surrounding whitespace.
#[must_use]
pub fn calories_for(label: &str) -> u32 {
    let label = label.trim();
    FOOD_CALORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map_or(DEFAULT_FOOD_CALORIES, |(_, kcal)| *kcal)
}

/// Eating advice band for a serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieAdvice {
    /// Below 100 kcal
    Light,
    /// 100-249 kcal
    Moderate,
    /// 250-399 kcal
    High,
    /// 400 kcal and above
    VeryHigh,
}

impl CalorieAdvice {
    /// Band for a serving of `kcal`
    #[must_use]
    pub const fn classify(kcal: u32) -> Self {
        match kcal {
            0..=99 => Self::Light,
            100..=249 => Self::Moderate,
            250..=399 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Advice shown under the estimate
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Light => "Very light, rich in vitamins and fibre. Good for your health!",
            Self::Moderate => "Moderate calories, fits a balanced meal.",
            Self::High => "High in calories, pair it with greens and some exercise.",
            Self::VeryHigh => "Very high in calories, eat in moderation and train harder.",
        }
    }
}

/// Calorie estimate for one recognised food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEstimate {
    /// Label as reported by the classifier
    pub food: String,
    /// Kcal per serving
    pub calories: u32,
    /// Advice band for `calories`
    pub advice: CalorieAdvice,
}

impl FoodEstimate {
    /// Look up a classifier label
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        let calories = calories_for(label);
        Self {
            food: label.trim().to_owned(),
            calories,
            advice: CalorieAdvice::classify(calories),
        }
    }
}

impl fmt::Display for FoodEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Food: {}", self.food)?;
        writeln!(f, "Calories: ~{} kcal/serving", self.calories)?;
        write!(f, "Tip: {}", self.advice.message())
    }
}
