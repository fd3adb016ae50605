//! Configuration loading and management

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::{Route, Site};

/// An extra phrase-to-route rule appended after the built-in table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraRule {
    /// Any of these phrases (case-insensitive) triggers the rule
    pub phrases: Vec<String>,
    /// Destination written to the navigation slot
    pub route: Route,
}

/// Voice settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Whether voice input is offered at all
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// Volume for spoken feedback (0.0-1.0)
    #[serde(default = "default_feedback_volume")]
    pub feedback_volume: f32,
}

fn default_voice_enabled() -> bool {
    true
}

fn default_feedback_volume() -> f32 {
    1.0
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            feedback_volume: default_feedback_volume(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// UI language tag (e.g. "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Voice settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Sites appended to the spoken site directory
    #[serde(default)]
    pub extra_sites: Vec<Site>,

    /// Navigation rules appended after the built-in table
    #[serde(default)]
    pub extra_rules: Vec<ExtraRule>,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            voice: VoiceSettings::default(),
            extra_sites: Vec::new(),
            extra_rules: Vec::new(),
        }
    }
}

impl Settings {
    /// Get the global config directory path (`~/.axess/`)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".axess")
    }

    /// Get the global config file path (`~/.axess/config.toml`)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// The BCP-47 tag handed to the speech recognizer
    pub fn recognition_language(&self) -> String {
        if self.language == "en" {
            "en-US".to_string()
        } else {
            format!("{}-{}", self.language, self.language.to_uppercase())
        }
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Load the global configuration, creating a default file if none exists
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();
        if !path.exists() {
            let settings = Self::default();
            settings.save_to_file(&path)?;
            return Ok(settings);
        }
        Self::from_file(&path)
    }

    /// Save configuration with an exclusive lock and atomic write
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Lock file is separate from the config to survive the rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        // Atomic write: temp file + rename
        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock released when lock_file is dropped
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, "en");
        assert!(settings.voice.enabled);
        assert_eq!(settings.voice.feedback_volume, 1.0);
        assert!(settings.extra_sites.is_empty());
    }

    #[test]
    fn recognition_language_tags() {
        let mut settings = Settings::default();
        assert_eq!(settings.recognition_language(), "en-US");

        settings.language = "de".to_string();
        assert_eq!(settings.recognition_language(), "de-DE");
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.language = "fr".to_string();
        settings.extra_sites.push(Site::new("gitlab", "https://gitlab.com"));
        settings.extra_rules.push(ExtraRule {
            phrases: vec!["home".to_string()],
            route: Route::Dashboard,
        });
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.language, "fr");
        assert_eq!(loaded.extra_sites.len(), 1);
        assert_eq!(loaded.extra_rules[0].route, Route::Dashboard);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"te\"\n").unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.language, "te");
        assert!(loaded.voice.enabled);
    }
}
