use modelhost_common::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config_loader::AppConfig;
use crate::model_settings::{ModelParameters, ModelSettings};

/// Reserved base name of per-model settings documents
pub const DEFAULT_MODEL_SETTINGS_FILENAME: &str = "model-settings.json";

/// Discovers and loads model settings documents under a repository root
pub struct SettingsLoader {
    root: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a loader over an optional repository root
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Create a loader wired from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.models.repository_root.clone())
    }

    /// Discover every model settings document under the root.
    ///
    /// Documents are loaded in full-path order, so repeated scans of an
    /// unchanged tree return records in a stable order. A malformed document
    /// fails the whole call rather than being skipped. When nothing matches
    /// (or no root is configured) the result is a single record with default
    /// settings and empty parameters; its `uri` is left unset since there is
    /// no document to derive it from.
    pub fn list(&self) -> Result<Vec<ModelSettings>> {
        let mut all_model_settings = Vec::new();

        if let Some(root) = &self.root {
            for path in find_settings_files(root) {
                debug!(path = %path.display(), "loading model settings");
                all_model_settings.push(load_settings_file(&path)?);
            }
        }

        // No matches anywhere: fall back to a single default record
        if all_model_settings.is_empty() {
            let mut model_settings = ModelSettings::default();
            model_settings.parameters = Some(ModelParameters::default());
            all_model_settings.push(model_settings);
        }

        Ok(all_model_settings)
    }

    /// Look up one model by name among the discovered records
    pub fn read(&self, name: &str) -> Result<ModelSettings> {
        self.list()?
            .into_iter()
            .find(|model_settings| model_settings.name == name)
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }
}

/// Collect settings documents under `root`, sorted by full path.
///
/// Entries the walk cannot read are skipped, matching recursive-glob
/// semantics. A root that does not exist yields no matches.
fn find_settings_files(root: &Path) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file() && entry.file_name() == DEFAULT_MODEL_SETTINGS_FILENAME
        })
        .map(|entry| entry.into_path())
        .collect();

    matches.sort();
    matches
}

/// Parse one settings document and fill in its defaults
pub fn load_settings_file(path: &Path) -> Result<ModelSettings> {
    let content = std::fs::read_to_string(path)?;
    let mut model_settings: ModelSettings =
        serde_json::from_str(&content).map_err(|source| Error::InvalidModelSettings {
            path: path.to_path_buf(),
            source,
        })?;

    model_settings.normalize(path);

    Ok(model_settings)
}
