// ABOUTME: Voice coaching throttle settings
// ABOUTME: Cooldowns between spoken phrases and between form-error phrases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use super::{apply_env_var, ConfigError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Narration rate limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Minimum gap between any two utterances (milliseconds)
    pub speech_cooldown_ms: u64,
    /// Minimum gap between two form-error utterances (milliseconds)
    pub form_feedback_cooldown_ms: u64,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            speech_cooldown_ms: 200,
            form_feedback_cooldown_ms: 5_000,
        }
    }
}

impl CoachingConfig {
    /// Load from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var("KEEPY_SPEECH_COOLDOWN_MS", &mut config.speech_cooldown_ms)?;
        apply_env_var(
            "KEEPY_FORM_FEEDBACK_COOLDOWN_MS",
            &mut config.form_feedback_cooldown_ms,
        )?;
        Ok(config)
    }

    /// Gap between utterances
    #[must_use]
    pub const fn speech_cooldown(&self) -> Duration {
        Duration::from_millis(self.speech_cooldown_ms)
    }

    /// Gap between form-error utterances
    #[must_use]
    pub const fn form_feedback_cooldown(&self) -> Duration {
        Duration::from_millis(self.form_feedback_cooldown_ms)
    }
}
