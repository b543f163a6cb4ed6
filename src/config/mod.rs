// ABOUTME: Application configuration gathered from the environment at startup
// ABOUTME: Combines logging, history storage location, and analysis thresholds into one injectable value
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

//! Configuration module for the Keepy Fitness tools
//!
//! Everything is read once, validated, and handed to the components that need
//! it. Nothing here is global.
//!
//! - **Logging**: `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`
//! - **History**: `KEEPY_HISTORY_PATH`
//! - **Analysis**: `KEEPY_*` threshold overrides
//! - **Heart rate**: `KEEPY_HEART_RATE_*`
//! - **Coaching**: speech cooldowns

use std::env;
use std::path::PathBuf;

use keepy_core::errors::{AppError, AppResult};
use keepy_intelligence::config::{CoachingConfig, FormAnalysisConfig, HeartRateConfig};
use tracing::{debug, warn};

use crate::logging::LoggingConfig;

/// Environment variable naming the JSON-lines history file
pub const HISTORY_PATH_ENV: &str = "KEEPY_HISTORY_PATH";

/// File name of the history store inside the data directory
pub const HISTORY_FILE_NAME: &str = "workout_history.jsonl";

/// Application directory under the platform data directory
const APP_DIR_NAME: &str = "keepy-fitness";

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Location of the JSON-lines workout history
    pub history_path: PathBuf,
    /// Form analysis and rep counting thresholds
    pub analysis: FormAnalysisConfig,
    /// Camera heart-rate estimation settings
    pub heart_rate: HeartRateConfig,
    /// Speech cooldowns
    pub coaching: CoachingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            history_path: default_history_path(),
            analysis: FormAnalysisConfig::default(),
            heart_rate: HeartRateConfig::default(),
            coaching: CoachingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the resulting
    /// thresholds are inconsistent
    pub fn from_env() -> AppResult<Self> {
        let history_path = match env::var(HISTORY_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            Ok(_) => {
                warn!("{HISTORY_PATH_ENV} is empty, using the default history location");
                default_history_path()
            }
            Err(_) => default_history_path(),
        };

        let config = Self {
            logging: LoggingConfig::from_env(),
            history_path,
            analysis: FormAnalysisConfig::load().map_err(AppError::from)?,
            heart_rate: HeartRateConfig::load().map_err(AppError::from)?,
            coaching: CoachingConfig::load().map_err(AppError::from)?,
        };
        debug!(history_path = %config.history_path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Replace the history location, e.g. from a command-line flag
    #[must_use]
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }
}

/// Default history file under the platform data directory
///
/// Falls back to the working directory when the platform has no data
/// directory.
#[must_use]
pub fn default_history_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".").join(HISTORY_FILE_NAME),
        |dir| dir.join(APP_DIR_NAME).join(HISTORY_FILE_NAME),
    )
}
