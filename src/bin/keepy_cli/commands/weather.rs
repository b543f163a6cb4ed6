// ABOUTME: Weather suggestion command for keepy-cli
// ABOUTME: Turns current weather readings into an indoor or outdoor exercise plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use anyhow::{bail, Result};
use keepy_fitness::intelligence::weather::{WeatherCondition, WorkoutWeather};

use crate::helpers::display::display_weather;

/// Print workout suggestions for the given conditions
pub fn run(code: i32, temp_c: f64, wind_kmh: f64) -> Result<()> {
    if !temp_c.is_finite() || !wind_kmh.is_finite() || wind_kmh < 0.0 {
        bail!("Temperature and wind speed must be finite, wind non-negative");
    }
    let condition = WeatherCondition::from_code(code);
    let plan = WorkoutWeather::classify(code, temp_c, wind_kmh);
    display_weather(condition, plan, temp_c, wind_kmh);
    Ok(())
}
