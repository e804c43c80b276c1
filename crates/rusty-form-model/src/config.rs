// File: crates/rusty-form-model/src/config.rs
// Purpose: Override maps loaded from form_metadata.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::metadata::{MetadataKind, OverrideMap, Overrides};

/// Default file name looked up by [`MetadataConfig::load_default`]
pub const DEFAULT_METADATA_FILE: &str = "form_metadata.toml";

/// Hint, label and placeholder texts for a form, as stored on disk
///
/// ```toml
/// [labels]
/// amount = "Amount label text."
///
/// [hints]
/// amount = "Amount hint text."
///
/// [placeholders]
/// amount = "Amount placeholder text."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub hints: OverrideMap,

    #[serde(default)]
    pub labels: OverrideMap,

    #[serde(default)]
    pub placeholders: OverrideMap,
}

impl MetadataConfig {
    /// Load texts from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means no overrides
        if !path.exists() {
            tracing::debug!(?path, "form metadata file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form metadata file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: MetadataConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse form metadata file: {:?}", path))?;

        tracing::debug!(
            ?path,
            hints = config.hints.len(),
            labels = config.labels.len(),
            placeholders = config.placeholders.len(),
            "loaded form metadata"
        );

        Ok(config)
    }

    /// Load texts from ./form_metadata.toml
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_METADATA_FILE)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse form metadata")
    }

    pub fn map(&self, kind: MetadataKind) -> &OverrideMap {
        match kind {
            MetadataKind::Hint => &self.hints,
            MetadataKind::Label => &self.labels,
            MetadataKind::Placeholder => &self.placeholders,
        }
    }

    /// Turn the loaded maps into [`Overrides`]; empty tables stay unset
    pub fn into_overrides(self) -> Overrides {
        let mut overrides = Overrides::new();
        for kind in MetadataKind::ALL {
            let map = self.map(kind);
            if !map.is_empty() {
                overrides = overrides.with_map(kind, map.clone());
            }
        }
        overrides
    }
}
