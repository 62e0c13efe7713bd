//! Unified error types for vibe-coding-setup.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
///
/// Everything here is fatal to a run. Empty-name validation never leaves the
/// input collector, and per-file template write failures are collected in a
/// [`crate::templates::renderer::RenderReport`] instead of surfacing as errors.
#[derive(Error, Debug)]
pub enum SetupError {
    // --- Configuration ---

    /// The layout config file passed with `--config` could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Project ---

    /// A file or directory already exists where the project root would go.
    #[error("directory '{name}' already exists, please choose a different name")]
    ProjectExists { name: String, path: PathBuf },

    /// The sanitized project name cannot be used as a directory name.
    #[error("project name '{0}' contains no usable characters")]
    InvalidName(String),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem or console I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, SetupError>`.
pub type Result<T> = std::result::Result<T, SetupError>;
