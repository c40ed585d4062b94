//! Pattern-type settings persistence.
//!
//! Holds the mode used when a query carries no `patterntype:` directive.
//! Settings are stored as JSON; the `PATTERN_TYPE_DEFAULT` environment
//! variable overrides the stored value.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::query::PatternType;

const DEFAULT_ENV: &str = "PATTERN_TYPE_DEFAULT";
const SETTINGS_PATH_ENV: &str = "PATTERN_TYPE_SETTINGS_PATH";

/// Persisted pattern-type settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTypeSettings {
    /// Mode applied when the query has no directive.
    #[serde(default)]
    pub default_pattern_type: PatternType,
}

impl PatternTypeSettings {
    /// Get the effective default, preferring `PATTERN_TYPE_DEFAULT` when set.
    pub fn effective_default(&self) -> PatternType {
        self.default_with_override(std::env::var(DEFAULT_ENV).ok().as_deref())
    }

    fn default_with_override(&self, raw: Option<&str>) -> PatternType {
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            return self.default_pattern_type;
        };
        match raw.parse() {
            Ok(pattern_type) => pattern_type,
            Err(e) => {
                log::warn!("ignoring {DEFAULT_ENV}: {e}");
                self.default_pattern_type
            }
        }
    }
}

/// Settings store that persists to disk.
pub struct PatternTypeSettingsStore {
    path: PathBuf,
}

impl PatternTypeSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `PATTERN_TYPE_SETTINGS_PATH` or falls back to the config directory.
    pub fn default_location() -> Self {
        let path = std::env::var(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("pattern-type")
                    .join("settings.json")
            });
        Self::new(path)
    }

    /// Load settings from disk, returning defaults if not found.
    pub fn load(&self) -> Result<PatternTypeSettings> {
        if !self.path.exists() {
            log::debug!("no settings at {}, using defaults", self.path.display());
            return Ok(PatternTypeSettings::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, settings: &PatternTypeSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
