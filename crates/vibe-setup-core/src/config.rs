//! Layout configuration for generated projects.
//!
//! Two conventions have been in use for generated projects: rules as one
//! consolidated file or as a directory of per-concern `.mdc` files, and
//! memory-bank documents with or without numeric prefixes. [`LayoutConfig`]
//! picks one of each. It can be loaded from a JSON file:
//!
//! ```json
//! { "rules_format": "single-file", "doc_naming": "numbered" }
//! ```
//!
//! Missing keys fall back to the defaults (`directory`, `plain`). Unknown keys
//! are rejected so a misspelled key cannot silently select the defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};

/// How Cursor rules are laid out under `.cursor/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RulesFormat {
    /// One `.mdc` file per concern in `.cursor/rules/`.
    #[default]
    Directory,
    /// A single consolidated `.cursor/cursor-rules.md`.
    SingleFile,
}

impl RulesFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::SingleFile => "single-file",
        }
    }
}

impl fmt::Display for RulesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File naming convention for memory-bank documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocNaming {
    /// `product-requirements.md`, `tech-stack.md`, ...
    #[default]
    Plain,
    /// `01-product-requirements.md`, `02-tech-stack.md`, ...
    Numbered,
}

impl DocNaming {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Numbered => "numbered",
        }
    }
}

impl fmt::Display for DocNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical layout a run will produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub rules_format: RulesFormat,
    pub doc_naming: DocNaming,
}

impl LayoutConfig {
    /// Load a layout from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SetupError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| SetupError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply explicit overrides on top of this layout.
    pub fn with_overrides(
        mut self,
        rules_format: Option<RulesFormat>,
        doc_naming: Option<DocNaming>,
    ) -> Self {
        if let Some(format) = rules_format {
            self.rules_format = format;
        }
        if let Some(naming) = doc_naming {
            self.doc_naming = naming;
        }
        self
    }
}
