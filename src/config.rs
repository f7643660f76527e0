use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::error::ConfigError;
use crate::state::EndBehavior;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub total_scenes: u32,
    pub scene_duration_ms: u64,
    pub enter_stagger_ms: u64,
    pub exit_duration_ms: u64,
    pub end_behavior: EndBehavior,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            total_scenes: SCENE_COUNT,
            scene_duration_ms: SCENE_DURATION_MS,
            enter_stagger_ms: ENTER_STAGGER_MS,
            exit_duration_ms: EXIT_DURATION_MS,
            end_behavior: EndBehavior::Pause,
        }
    }
}

impl PresentationConfig {
    /// Reads a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<Self>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded presentation config");
        Ok(config)
    }

    /// Applies `SLIDEDECK_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup; `lookup` receives full variable names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(key.as_str()).map(|value| (key, value))
        };

        if let Some((key, value)) = var("TOTAL_SCENES") {
            self.total_scenes = parse_number(&key, &value)?;
        }
        if let Some((key, value)) = var("SCENE_DURATION_MS") {
            self.scene_duration_ms = parse_number(&key, &value)?;
        }
        if let Some((key, value)) = var("ENTER_STAGGER_MS") {
            self.enter_stagger_ms = parse_number(&key, &value)?;
        }
        if let Some((key, value)) = var("EXIT_DURATION_MS") {
            self.exit_duration_ms = parse_number(&key, &value)?;
        }
        if let Some((key, value)) = var("END_BEHAVIOR") {
            self.end_behavior = value
                .parse()
                .map_err(|reason| ConfigError::InvalidEnv { key, value, reason })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_scenes == 0 {
            return Err(ConfigError::NoScenes);
        }
        if self.scene_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    pub fn scene_duration(&self) -> Duration {
        Duration::from_millis(self.scene_duration_ms)
    }

    pub fn enter_stagger(&self) -> Duration {
        Duration::from_millis(self.enter_stagger_ms)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
