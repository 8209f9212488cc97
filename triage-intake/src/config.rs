use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};
use crate::intake::Language;

pub const DEFAULT_CONFIG_FILE: &str = "triage.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_language: Language,
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_language: Language::default(),
            download_dir: PathBuf::from("."),
        }
    }
}

impl IntakeConfig {
    /// Load configuration from file with environment variable overrides.
    /// A missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            log::warn!("Could not find {}, using defaults", path.display());
            IntakeConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            IntakeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TRIAGE_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("TRIAGE_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(seconds) => self.backend.timeout_seconds = seconds,
                Err(_) => log::warn!("Ignoring invalid TRIAGE_TIMEOUT_SECONDS: {}", timeout),
            }
        }
        if let Some(code) = lookup("TRIAGE_LANGUAGE") {
            match Language::from_code(&code) {
                Some(lang) => self.ui.default_language = lang,
                None => log::warn!("Ignoring unsupported TRIAGE_LANGUAGE: {}", code),
            }
        }
        if let Some(dir) = lookup("TRIAGE_DOWNLOAD_DIR") {
            self.ui.download_dir = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = IntakeConfig::from_toml_str(
            r#"
            [backend]
            base_url = "https://triage.example.org"

            [ui]
            default_language = "en"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "https://triage.example.org");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert_eq!(config.ui.default_language, Language::En);
        assert_eq!(config.ui.download_dir, PathBuf::from("."));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = IntakeConfig::from_toml_str("[backend\nbase_url = 3").unwrap_err();
        assert!(matches!(err, IntakeError::ConfigParse(_)));
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TRIAGE_BACKEND_URL", "http://scoring:9000"),
            ("TRIAGE_TIMEOUT_SECONDS", "5"),
            ("TRIAGE_LANGUAGE", "fr"),
            ("TRIAGE_DOWNLOAD_DIR", "/tmp/exports"),
        ]);

        let mut config = IntakeConfig::default();
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.backend.base_url, "http://scoring:9000");
        assert_eq!(config.backend.timeout_seconds, 5);
        assert_eq!(config.ui.default_language, Language::Ar);
        assert_eq!(config.ui.download_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            IntakeConfig::load(Some(Path::new("/nonexistent/triage-intake.toml"))).unwrap();
        assert_eq!(config.backend.connect_timeout_seconds, 10);
    }
}
