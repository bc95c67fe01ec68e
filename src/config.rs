use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure for studybuddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend provider configuration
    #[serde(default)]
    pub provider: ProviderSection,

    /// Terminal display configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    /// Groq configuration; the only backend the app talks to
    pub groq: Option<ProviderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Temperature setting
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable colorful output
    #[serde(default = "default_colorful")]
    pub colorful: bool,

    /// Show a spinner while a request is in flight
    #[serde(default = "default_spinner")]
    pub spinner: bool,

    /// Characters of extracted document text shown as a preview
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory saved responses are written to
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

// Default value functions
fn default_enabled() -> bool {
    true
}
fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}
fn default_temperature() -> f32 {
    0.0
}
fn default_colorful() -> bool {
    true
}
fn default_spinner() -> bool {
    true
}
fn default_preview_chars() -> usize {
    4000
}
fn default_export_dir() -> String {
    "./exports".to_string()
}

impl Default for ProviderSection {
    fn default() -> Self {
        ProviderSection {
            groq: Some(ProviderConfig::default()),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            enabled: default_enabled(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colorful: default_colorful(),
            spinner: default_spinner(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            dir: default_export_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderSection::default(),
            ui: UiConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from command line argument or default locations
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        let default_paths = vec![
            "studybuddy.toml",
            ".studybuddy.toml",
            "~/.config/studybuddy/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return Ok(config),
                    Err(e) => eprintln!("Warning: Failed to load config from {}: {}", path, e),
                }
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }
}
