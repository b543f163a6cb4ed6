// ABOUTME: Re-exports helper modules for keepy-cli
// ABOUTME: Provides the transcript narrator and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

pub mod display;
pub mod transcript;
