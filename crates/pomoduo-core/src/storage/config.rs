//! TOML-based application configuration.
//!
//! Stores the durations a fresh timer is seeded with, the preset buttons,
//! and the default mute flag. Configuration is stored at
//! `~/.config/pomoduo/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::timer::MAX_SEGMENT_SECS;

/// Default segment lengths for a fresh timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Sound configuration. Playback itself lives outside the core; this is
/// only the persisted default for the mute advisory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default)]
    pub muted: bool,
}

/// A named work/break pairing, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomoduo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

fn default_work_minutes() -> u32 {
    25
}
fn default_break_minutes() -> u32 {
    5
}
fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Classic".into(),
            work_minutes: 25,
            break_minutes: 5,
        },
        Preset {
            name: "Deep".into(),
            work_minutes: 50,
            break_minutes: 10,
        },
        Preset {
            name: "Extended".into(),
            work_minutes: 90,
            break_minutes: 15,
        },
    ]
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { muted: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            sound: SoundConfig::default(),
            presets: default_presets(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults on any error.
    pub fn load() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&raw).unwrap_or_default()
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Work duration in seconds, clamped to the engine's bounds.
    pub fn work_seconds(&self) -> u32 {
        self.timer.work_minutes.saturating_mul(60).clamp(1, MAX_SEGMENT_SECS)
    }

    /// Break duration in seconds, clamped to the engine's bounds.
    pub fn break_seconds(&self) -> u32 {
        self.timer.break_minutes.saturating_mul(60).clamp(1, MAX_SEGMENT_SECS)
    }

    /// Look up a value by dotted key, e.g. `"timer.work_minutes"`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current.clone())
    }

    /// Set a value by dotted key, preserving the existing value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut root = serde_json::to_value(&*self)?;
        set_json_value_by_path(&mut root, key, value)?;
        *self = serde_json::from_value(root)?;
        self.save()
    }
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(ConfigError::UnknownKey(key.to_string()));
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            let existing = obj
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as bool"),
                    })?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?
                        .into(),
                ),
                serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "only scalar values can be set".into(),
                    })
                }
            };
            obj.insert(part.to_string(), new_value);
        } else {
            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
    }
    Ok(())
}
