//! Handlebars-based template renderer for project scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping turned off. Strict mode makes a `{{variable}}` missing from the
//! data context an error instead of an empty string. Escaping is off because the
//! output is Markdown and the operator's name and description must land verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{context, sets, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = context::build(&identity, "A todo app", &layout);
//! let report = renderer.render_and_write(&sets::documentation_set(layout.doc_naming), &dir, &data);
//! ```

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::Value;
use tracing::{info, warn};

use super::sets::TemplateFile;
use crate::error::{Result, SetupError};

/// A file that could not be produced, and why.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SetupError,
}

/// Outcome of writing one template set.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Files written, in template order.
    pub written: Vec<PathBuf>,
    /// Files that failed to render or write.
    pub failures: Vec<FileFailure>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Template renderer using Handlebars for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| SetupError::TemplateRender(e.to_string()))
    }

    /// Render every template and write it to `target_dir/<file_name>`.
    ///
    /// Best effort: a file that fails to render or write is recorded in the
    /// report and the remaining files are still attempted.
    pub fn render_and_write(
        &self,
        templates: &[TemplateFile],
        target_dir: &Path,
        data: &Value,
    ) -> RenderReport {
        let mut report = RenderReport::default();

        for file in templates {
            let path = target_dir.join(&file.file_name);
            let outcome = self
                .render(file.template, data)
                .and_then(|content| std::fs::write(&path, content).map_err(SetupError::from));

            match outcome {
                Ok(()) => {
                    info!(path = %path.display(), "wrote file");
                    report.written.push(path);
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to write file");
                    report.failures.push(FileFailure { path, error });
                }
            }
        }

        report
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
