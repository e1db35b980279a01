use modelhost_common::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub models: ModelsConfig,
}

/// Models configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Root directory searched recursively for model settings documents
    pub repository_root: Option<PathBuf>,
    /// Model the downstream repository should prefer when none is requested
    pub default_model: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            models: ModelsConfig {
                repository_root: Some(
                    dirs::home_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join(".local/share/modelhost/models"),
                ),
                default_model: None,
            },
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<AppConfig> {
        if let Some(path) = path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        // Check default locations
        let default_paths = vec![
            PathBuf::from("modelhost.json"),
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("modelhost/config.json"),
        ];

        for path in default_paths {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        // Use defaults
        Ok(AppConfig::default())
    }

    /// Save configuration to file
    pub fn save(config: &AppConfig, path: &PathBuf) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
