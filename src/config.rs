//! Configuration management for the resume lens engine

use crate::error::{Result, ResumeLensError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the stored generative-service key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
    pub intake: IntakeConfig,
}

/// External generative service settings. A missing key is not an error: the
/// engine routes straight to the heuristic pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// Upper bound on the single generation attempt; expiry falls back to
    /// the heuristic path like any other failure.
    pub timeout_secs: u64,
}

/// Upstream "is this even a resume" screening applied before the engine runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    pub min_text_length: usize,
    pub min_section_hits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                api_key: None,
                model: "gemini-1.5-flash".to_string(),
                api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                timeout_secs: 20,
            },
            intake: IntakeConfig {
                min_text_length: 150,
                min_section_hits: 3,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_override();
        Ok(config)
    }

    /// Load from an explicit path, writing the default file when absent.
    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| ResumeLensError::Configuration(format!("Failed to parse config: {}", e)))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeLensError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// The environment wins over the stored credential.
    pub fn apply_env_override(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.ai.api_key = Some(key);
            }
        }
    }

    pub fn ai_configured(&self) -> bool {
        self.ai
            .api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-lens")
            .join("config.toml")
    }
}
