//! # Configuration
//!
//! Engine configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `MARGINALIA_MOST_ANNOTATED_LIMIT`, `MARGINALIA_EXPORT_*`.
//! 2. **TOML file**: passed to [`EngineConfig::load`].
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `most_annotated_limit` | `10` | Length of the most-annotated targets ranking |
//! | `export.include_notes` | `true` | Render notes in Markdown exports |
//! | `export.include_color` | `true` | Color line in Markdown, `Color` column in CSV |
//! | `export.include_timestamps` | `true` | Created line in Markdown, `Created` column in CSV |
//! | `export.pretty_json` | `true` | Indent JSON exports |

use crate::commands::stats::DEFAULT_MOST_ANNOTATED_LIMIT;
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    #[config(default = true, env = "MARGINALIA_EXPORT_INCLUDE_NOTES")]
    pub include_notes: bool,

    #[config(default = true, env = "MARGINALIA_EXPORT_INCLUDE_COLOR")]
    pub include_color: bool,

    #[config(default = true, env = "MARGINALIA_EXPORT_INCLUDE_TIMESTAMPS")]
    pub include_timestamps: bool,

    #[config(default = true, env = "MARGINALIA_EXPORT_PRETTY_JSON")]
    pub pretty_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_notes: true,
            include_color: true,
            include_timestamps: true,
            pretty_json: true,
        }
    }
}

/// Configuration for one [`crate::api::AnnotationEngine`], stored in `marginalia.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How many targets `most_annotated_paragraphs` reports.
    #[config(default = 10, env = "MARGINALIA_MOST_ANNOTATED_LIMIT")]
    pub most_annotated_limit: usize,

    #[config(nested)]
    pub export: ExportConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            most_annotated_limit: DEFAULT_MOST_ANNOTATED_LIMIT,
            export: ExportConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Environment over `path` (when given) over compiled defaults.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
