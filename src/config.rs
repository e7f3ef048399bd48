use config::{Config, Environment, File};
use serde_derive::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::gradient::Direction;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    pub direction: Option<String>,
    pub format: Option<Format>,
    #[serde(rename = "log-level", alias = "log_level")]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn gradient_direction(&self) -> Result<Direction> {
        match &self.direction {
            Some(direction) => direction.parse(),
            None => Ok(Direction::default()),
        }
    }

    /// Like `gradient_direction`, but a bad value falls back to the default
    /// so commands that never draw a gradient still run.
    pub fn gradient_direction_or_default(&self) -> Direction {
        self.gradient_direction().unwrap_or_else(|error| {
            warn!(%error, "using default gradient direction");
            Direction::default()
        })
    }

    pub fn output_format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Reads `<path>.json` if present, then `SOUND_ALCHEMY_*` environment variables.
pub fn get_config(path: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("SOUND_ALCHEMY"))
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
