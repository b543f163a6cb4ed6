// ABOUTME: Readers for recorded pose frames (JSON lines) and camera heart-rate sample files
// ABOUTME: Malformed input lines are skipped and counted instead of aborting the whole recording
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Keepy Fitness

use std::io::ErrorKind;
use std::path::Path;

use keepy_core::errors::{AppError, AppResult};
use keepy_core::models::{LandmarkSnapshot, PoseLandmark};
use tracing::warn;

/// Frames parsed from a recording
#[derive(Debug, Clone, Default)]
pub struct FrameRecording {
    /// Parsed frames in recording order
    pub frames: Vec<LandmarkSnapshot>,
    /// Non-empty lines that could not be parsed
    pub skipped: usize,
}

impl FrameRecording {
    /// Number of frames in which each joint has a usable position
    #[must_use]
    pub fn joint_coverage(&self) -> Vec<(PoseLandmark, usize)> {
        PoseLandmark::ALL
            .into_iter()
            .map(|joint| {
                let seen = self
                    .frames
                    .iter()
                    .filter(|frame| frame.point(joint).is_some())
                    .count();
                (joint, seen)
            })
            .collect()
    }
}

/// Parse one `LandmarkSnapshot` JSON object per line
///
/// Blank lines and lines starting with `#` are ignored.
#[must_use]
pub fn parse_frames(contents: &str) -> FrameRecording {
    let mut recording = FrameRecording::default();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<LandmarkSnapshot>(line) {
            Ok(frame) => recording.frames.push(frame),
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping malformed frame");
                recording.skipped += 1;
            }
        }
    }
    recording
}

/// Read and parse a JSON-lines frame recording
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub async fn read_frames(path: &Path) -> AppResult<FrameRecording> {
    let contents = read_input(path).await?;
    Ok(parse_frames(&contents))
}

/// Parse per-frame brightness means separated by whitespace or commas
///
/// Returns the values and the number of tokens that were not numbers.
#[must_use]
pub fn parse_samples(contents: &str) -> (Vec<f64>, usize) {
    let mut samples = Vec::new();
    let mut skipped = 0;
    for token in contents
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        match token.parse::<f64>() {
            Ok(value) => samples.push(value),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "Ignored non-numeric heart-rate samples");
    }
    (samples, skipped)
}

/// Read a file of per-frame brightness means
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub async fn read_samples(path: &Path) -> AppResult<Vec<f64>> {
    let contents = read_input(path).await?;
    Ok(parse_samples(&contents).0)
}

async fn read_input(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(path.display().to_string()).with_source(e)
        } else {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frames_skips_bad_lines() {
        let contents = "\
# squat recording
{\"timestamp_ms\": 1, \"landmarks\": {\"left_hip\": {\"x\": 1.0, \"y\": 2.0}}}

not json
{\"landmarks\": {}}
";
        let recording = parse_frames(contents);
        assert_eq!(recording.frames.len(), 2);
        assert_eq!(recording.skipped, 1);
        assert!(recording.frames[0].point(PoseLandmark::LeftHip).is_some());
        assert!(recording.frames[1].is_empty());
    }

    #[test]
    fn test_parse_samples_mixed_separators() {
        let (samples, skipped) = parse_samples("120.5, 121\n122 abc\t123");
        assert_eq!(samples, vec![120.5, 121.0, 122.0, 123.0]);
        assert_eq!(skipped, 1);
    }
}
