//! Configuration file loader
//!
//! Newline-delimited `key=value` text, read once at startup. Unknown keys are
//! ignored, lines containing `#` are skipped as comments, and a missing file
//! means defaults. A malformed numeric value is fatal: the process should
//! stop before the physics loop starts.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The toy's tunable knobs. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Window width, pixels
    pub width: u32,
    /// Window height, pixels
    pub height: u32,
    /// Coefficient of restitution for ball bounces
    pub ball_bounciness: f32,
    /// Coefficient of restitution for window bounces
    pub window_bounciness: f32,
    /// Ball radius, pixels
    pub ball_radius: f32,
    /// Number of balls; zero or negative spawns none
    pub ball_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            ball_bounciness: 0.85,
            window_bounciness: 0.85,
            ball_radius: 50.0,
            ball_count: 3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for key {key:?} on line {line}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
}

impl Config {
    /// Load from a file. A missing file is not an error: defaults apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::parse(&text)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Parse `key=value` lines over the defaults.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.contains('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            let invalid = || ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                line: index + 1,
            };

            match key {
                "width" => config.width = value.parse().map_err(|_| invalid())?,
                "height" => config.height = value.parse().map_err(|_| invalid())?,
                "ball_bounciness" => {
                    config.ball_bounciness = value.parse().map_err(|_| invalid())?;
                }
                "window_bounciness" => {
                    config.window_bounciness = value.parse().map_err(|_| invalid())?;
                }
                "ball_radius" => config.ball_radius = value.parse().map_err(|_| invalid())?,
                "ball_count" => config.ball_count = value.parse().map_err(|_| invalid())?,
                _ => log::debug!("Ignoring unknown config key {key:?}"),
            }
        }

        Ok(config)
    }
}
