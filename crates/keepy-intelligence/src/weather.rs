// ABOUTME: Weather-aware workout suggestions from current conditions
// ABOUTME: Maps WMO weather codes to conditions and picks indoor or outdoor exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! Weather-based workout suggestions
//!
//! Inputs are the current-weather fields of a forecast service: a WMO
//! weather code, air temperature in °C and wind speed in km/h. Fetching
//! them (location, HTTP) is left to the caller.

use keepy_core::models::Exercise;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather codes that mean rain, drizzle, showers or thunderstorms
pub const WET_WEATHER_CODES: [i32; 12] = [51, 53, 55, 61, 63, 65, 80, 81, 82, 95, 96, 99];

/// Pleasant outdoor temperature band (°C, inclusive)
pub const MILD_TEMPERATURE_C: (f64, f64) = (15.0, 25.0);

/// Below this it is cold (°C)
pub const COLD_BELOW_C: f64 = 15.0;

/// Above this it is hot (°C)
pub const HOT_ABOVE_C: f64 = 30.0;

/// Above this it is too windy to train outside (km/h)
pub const WINDY_ABOVE_KMH: f64 = 30.0;

/// Sky condition for a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// 0
    Clear,
    /// 1-3
    Cloudy,
    /// 4-10
    Haze,
    /// 11-20
    BlowingDust,
    /// 21-29
    DustOrSand,
    /// 30-35
    LightFog,
    /// 36-39
    DenseFog,
    /// 40
    SettlingFog,
    /// 41-44
    LowCloud,
    /// 45
    Fog,
    /// 48
    RimeFog,
    /// 51-55
    Drizzle,
    /// 56-57
    FreezingDrizzle,
    /// 61-65
    Rain,
    /// 66-67
    FreezingRain,
    /// 71-75
    Snow,
    /// 77
    SnowGrains,
    /// 80-82
    RainShowers,
    /// 85-86
    SnowShowers,
    /// 95-96
    Thunderstorm,
    /// 99
    ThunderstormWithHail,
    /// Any other code
    Other,
}

impl WeatherCondition {
    /// Condition for a weather code
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Cloudy,
            4..=10 => Self::Haze,
            11..=20 => Self::BlowingDust,
            21..=29 => Self::DustOrSand,
            30..=35 => Self::LightFog,
            36..=39 => Self::DenseFog,
            40 => Self::SettlingFog,
            41..=44 => Self::LowCloud,
            45 => Self::Fog,
            48 => Self::RimeFog,
            51..=55 => Self::Drizzle,
            56..=57 => Self::FreezingDrizzle,
            61..=65 => Self::Rain,
            66..=67 => Self::FreezingRain,
            71..=75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85..=86 => Self::SnowShowers,
            95..=96 => Self::Thunderstorm,
            99 => Self::ThunderstormWithHail,
            _ => Self::Other,
        }
    }

    /// Short description for display
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::Cloudy => "Cloudy",
            Self::Haze => "Smoke or haze",
            Self::BlowingDust => "Blowing dust or sand",
            Self::DustOrSand => "Dust or sand",
            Self::LightFog => "Light fog",
            Self::DenseFog => "Dense fog",
            Self::SettlingFog => "Settling fog",
            Self::LowCloud => "Fog or low cloud",
            Self::Fog => "Fog",
            Self::RimeFog => "Freezing fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Other => "Other weather",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Which rule picked the suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutWeather {
    /// Rain, drizzle, showers or thunderstorm
    Wet,
    /// Below 15 °C
    Cold,
    /// Clear sky between 15 and 25 °C
    Fair,
    /// Cloudy sky between 15 and 25 °C
    Overcast,
    /// Above 30 °C
    Hot,
    /// Wind above 30 km/h
    Windy,
    /// None of the above
    Unsettled,
}

impl WorkoutWeather {
    /// Classify current conditions; the first matching rule wins
    ///
    /// Order: wet code, cold, mild and clear, mild and cloudy, hot, windy.
    #[must_use]
    pub fn classify(code: i32, temp_c: f64, wind_kmh: f64) -> Self {
        let mild = (MILD_TEMPERATURE_C.0..=MILD_TEMPERATURE_C.1).contains(&temp_c);
        if WET_WEATHER_CODES.contains(&code) {
            Self::Wet
        } else if temp_c < COLD_BELOW_C {
            Self::Cold
        } else if mild && code == 0 {
            Self::Fair
        } else if mild && (1..=3).contains(&code) {
            Self::Overcast
        } else if temp_c > HOT_ABOVE_C {
            Self::Hot
        } else if wind_kmh > WINDY_ABOVE_KMH {
            Self::Windy
        } else {
            Self::Unsettled
        }
    }

    /// Suggested exercises, in the order they are offered
    #[must_use]
    pub const fn exercises(self) -> &'static [Exercise] {
        match self {
            Self::Wet | Self::Hot => &[Exercise::PushUp, Exercise::Squat, Exercise::Plank],
            Self::Cold | Self::Windy => &[Exercise::PushUp, Exercise::Squat, Exercise::TreePose],
            Self::Fair => &[Exercise::JumpingJack, Exercise::TreePose],
            Self::Overcast => &[Exercise::JumpingJack, Exercise::Plank],
            Self::Unsettled => &[Exercise::PushUp, Exercise::Plank, Exercise::TreePose],
        }
    }

    /// Whether the suggestion is to train outside
    #[must_use]
    pub const fn is_outdoor(self) -> bool {
        matches!(self, Self::Fair | Self::Overcast)
    }

    /// One-line advice shown with the exercises
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Wet => "It's raining. Train indoors.",
            Self::Cold => "It's cold. Warm up well and train indoors.",
            Self::Fair => "Great weather. Head outside for cardio and balance.",
            Self::Overcast => "Cool and cloudy. Good for an outdoor session.",
            Self::Hot => "It's hot. Train indoors and drink plenty of water.",
            Self::Windy => "Strong wind. Stay safe and train indoors.",
            Self::Unsettled => "Unsettled weather. Prefer training indoors.",
        }
    }
}

/// Exercises suggested for the current weather
#[must_use]
pub fn suggest_workout(code: i32, temp_c: f64, wind_kmh: f64) -> Vec<Exercise> {
    WorkoutWeather::classify(code, temp_c, wind_kmh)
        .exercises()
        .to_vec()
}
