use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Settings for one servable model, as read from a settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Logical model identifier
    #[serde(default)]
    pub name: String,
    /// Reference to the code that executes the model, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    /// Model parameters; optional in the document, filled in by normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ModelParameters>,
    /// Top-level fields this core does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Parameters describing where and how to load a model's artifacts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Location of the model artifacts on disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<PathBuf>,
    /// Version label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Implementation-specific parameters
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ModelSettings {
    /// Fill in defaults for fields a settings document may omit.
    ///
    /// `settings_path` is the document this record was parsed from: a missing
    /// `parameters` block becomes an empty one, and a missing `uri` resolves
    /// to the document's own directory. Explicit values are never overwritten,
    /// so normalizing an already-normalized record changes nothing.
    pub fn normalize(&mut self, settings_path: &Path) {
        let parameters = self.parameters.get_or_insert_with(ModelParameters::default);

        if parameters.uri.is_none() {
            // Default to the folder holding the settings document
            parameters.uri = settings_path.parent().map(Path::to_path_buf);
        }
    }
}
