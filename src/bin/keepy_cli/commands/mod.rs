// ABOUTME: Re-exports command modules for keepy-cli
// ABOUTME: Provides replay, history, estimate, and suggestion commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

pub mod calories;
pub mod food;
pub mod heart_rate;
pub mod history;
pub mod replay;
pub mod weather;
