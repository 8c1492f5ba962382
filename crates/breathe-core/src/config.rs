//! TOML-based user configuration.
//!
//! Stores the sound gate and the session defaults used when the command
//! line leaves something unspecified. Stored at
//! `~/.config/breathe/config.toml`; set `BREATHE_ENV=dev` to use a
//! development directory instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::DeadlinePolicy;
use crate::error::ConfigError;

/// Sound preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default = "default_total_seconds")]
    pub total_seconds: u64,
    /// Preset name, or "manual" for the duration fields below.
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_inhale")]
    pub inhale: u64,
    #[serde(default = "default_hold_in")]
    pub hold_in: u64,
    #[serde(default = "default_exhale")]
    pub exhale: u64,
    #[serde(default = "default_hold_out")]
    pub hold_out: u64,
    /// Whether pausing pushes the session deadline forward too.
    #[serde(default = "default_true")]
    pub pause_extends_deadline: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/breathe/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub session: SessionDefaults,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_total_seconds() -> u64 {
    300
}
fn default_mode() -> String {
    "manual".into()
}
fn default_inhale() -> u64 {
    4
}
fn default_hold_in() -> u64 {
    3
}
fn default_exhale() -> u64 {
    5
}
fn default_hold_out() -> u64 {
    3
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            total_seconds: default_total_seconds(),
            mode: default_mode(),
            inhale: default_inhale(),
            hold_in: default_hold_in(),
            exhale: default_exhale(),
            hold_out: default_hold_out(),
            pause_extends_deadline: true,
        }
    }
}

impl AppConfig {
    /// The engine policy this configuration asks for.
    pub fn deadline_policy(&self) -> DeadlinePolicy {
        if self.session.pause_extends_deadline {
            DeadlinePolicy::ExtendOnPause
        } else {
            DeadlinePolicy::Fixed
        }
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// default config cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // ── Dot-path access for the `config` command ─────────────────────

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(render_value(current))
    }

    /// Set a config value from a string by dot-separated key. The new
    /// value must parse as the key's current type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let mut current = &mut json;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            let object = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            let slot = object
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            if parts.peek().is_none() {
                *slot = parse_value(slot, key, value)?;
                break;
            }
            current = slot;
        }

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Flattened `(key, value)` pairs for `config list`.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            flatten("", &json, &mut out);
        }
        out
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_value(
    existing: &serde_json::Value,
    key: &str,
    raw: &str,
) -> Result<serde_json::Value, ConfigError> {
    match existing {
        serde_json::Value::Bool(_) => raw
            .parse::<bool>()
            .map(serde_json::Value::Bool)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("cannot parse '{raw}' as a boolean"),
            }),
        serde_json::Value::Number(_) => raw
            .parse::<u64>()
            .map(|n| serde_json::Value::Number(n.into()))
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("cannot parse '{raw}' as a number"),
            }),
        serde_json::Value::String(_) => Ok(serde_json::Value::String(raw.to_string())),
        _ => Err(ConfigError::UnknownKey(key.to_string())),
    }
}

fn flatten(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&key, child, out);
            }
        }
        leaf => out.push((prefix.to_string(), render_value(leaf))),
    }
}

/// Returns `~/.config/breathe[-dev]/` based on BREATHE_ENV.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BREATHE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("breathe-dev")
    } else {
        base_dir.join("breathe")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();

        assert!(config.sound.enabled);
        assert_eq!(config.session.total_seconds, 300);
        assert_eq!(config.session.mode, "manual");
        assert!(path.exists());
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.sound.enabled = false;
        config.session.total_seconds = 600;
        config.session.mode = "box".into();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(!loaded.sound.enabled);
        assert_eq!(loaded.session.total_seconds, 600);
        assert_eq!(loaded.session.mode, "box");
    }

    #[test]
    fn garbage_on_disk_is_an_error_not_a_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sound = `not toml`").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn get_walks_dot_paths() {
        let config = AppConfig::default();
        assert_eq!(config.get("sound.enabled").unwrap(), "true");
        assert_eq!(config.get("session.total_seconds").unwrap(), "300");
        assert_eq!(config.get("session.mode").unwrap(), "manual");
        assert!(config.get("session.nope").is_none());
    }

    #[test]
    fn set_respects_the_existing_type() {
        let mut config = AppConfig::default();

        config.set("session.total_seconds", "600").unwrap();
        assert_eq!(config.session.total_seconds, 600);

        config.set("sound.enabled", "false").unwrap();
        assert!(!config.sound.enabled);

        config.set("session.mode", "relax").unwrap();
        assert_eq!(config.session.mode, "relax");

        assert!(config.set("session.total_seconds", "soon").is_err());
        assert!(config.set("no.such.key", "1").is_err());
    }

    #[test]
    fn entries_cover_every_leaf() {
        let config = AppConfig::default();
        let entries = config.entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();

        assert!(keys.contains(&"sound.enabled"));
        assert!(keys.contains(&"session.pause_extends_deadline"));
        assert!(keys.contains(&"session.hold_out"));
    }

    #[test]
    fn policy_follows_the_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.deadline_policy(), DeadlinePolicy::ExtendOnPause);
        config.session.pause_extends_deadline = false;
        assert_eq!(config.deadline_policy(), DeadlinePolicy::Fixed);
    }
}
