//! Loader for the RON motion tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MotionConfig;
use super::validation::validate_motion_config;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate motion tuning from RON text. `file` is only used for
/// error messages.
pub fn parse_motion_config(contents: &str, file: &str) -> Result<MotionConfig, ContentLoadError> {
    let config: MotionConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let errors = validate_motion_config(&config);
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!("Validation failed: {}", message),
        });
    }

    Ok(config)
}

/// Load motion tuning from a RON file.
pub fn load_motion_config(path: &Path) -> Result<MotionConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_motion_config(&contents, &file_name)
}

/// Load motion tuning, falling back to the built-in defaults on any failure.
pub fn load_motion_config_or_default(path: &Path) -> MotionConfig {
    match load_motion_config(path) {
        Ok(config) => {
            info!(
                "Loaded motion config from {}: {} jump strategies, {:.0}Hz physics",
                path.display(),
                config.jumps.len(),
                config.fixed_timestep_hz
            );
            config
        }
        Err(e) => {
            warn!("{}; using default motion config", e);
            MotionConfig::default()
        }
    }
}
