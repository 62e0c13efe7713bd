//! The scaffold pipeline: directories first, then documents, then rules.
//!
//! Directory failures abort the run. File failures inside a template set are
//! carried in that set's [`RenderReport`] so the caller can report them.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::name::ProjectIdentity;
use crate::project;
use crate::templates::renderer::{RenderReport, TemplateRenderer};
use crate::templates::{context, sets};

/// Everything a finished scaffold run produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub root: PathBuf,
    pub memory_bank: PathBuf,
    pub cursor: PathBuf,
    pub documents: RenderReport,
    pub rules: RenderReport,
}

impl ScaffoldOutcome {
    /// True when every document and rule file was written.
    pub fn is_complete(&self) -> bool {
        self.documents.is_complete() && self.rules.is_complete()
    }
}

/// Build the project tree for `identity` under `base`.
pub fn scaffold(
    base: &Path,
    identity: &ProjectIdentity,
    description: &str,
    layout: &LayoutConfig,
    renderer: &TemplateRenderer,
) -> Result<ScaffoldOutcome> {
    let root = project::create_root(base, identity.sanitized_name())?;
    let (memory_bank, cursor) = project::create_subdirectories(&root)?;

    let rules_dir = sets::rules_target_dir(&cursor, layout.rules_format);
    if rules_dir != cursor {
        project::ensure_dir(&rules_dir)?;
    }

    let data = context::build(identity, description, layout);
    debug!(
        rules_format = %layout.rules_format,
        doc_naming = %layout.doc_naming,
        "rendering templates"
    );

    let documents = renderer.render_and_write(
        &sets::documentation_set(layout.doc_naming),
        &memory_bank,
        &data,
    );
    let rules = renderer.render_and_write(&sets::rule_set(layout.rules_format), &rules_dir, &data);

    Ok(ScaffoldOutcome {
        root,
        memory_bank,
        cursor,
        documents,
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocNaming, RulesFormat};
    use crate::error::SetupError;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_end_to_end_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        let identity = ProjectIdentity::new("My Test Project");
        let renderer = TemplateRenderer::new();

        let outcome = scaffold(
            dir.path(),
            &identity,
            "This is a test project",
            &LayoutConfig::default(),
            &renderer,
        )
        .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.root, dir.path().join("My-Test-Project"));
        assert_eq!(outcome.memory_bank, outcome.root.join("memory-bank"));
        assert_eq!(outcome.cursor, outcome.root.join(".cursor"));

        assert_eq!(
            file_names(&outcome.memory_bank),
            [
                "architecture.md",
                "implementation-plan.md",
                "product-requirements.md",
                "progress.md",
                "tech-stack.md",
            ]
        );
        for path in &outcome.documents.written {
            let content = std::fs::read_to_string(path).unwrap();
            assert!(content.contains("My Test Project"));
            assert!(!content.contains("My-Test-Project"));
        }
        let prd = std::fs::read_to_string(outcome.memory_bank.join("product-requirements.md")).unwrap();
        assert!(prd.contains("This is a test project"));

        assert_eq!(file_names(&outcome.cursor), ["rules"]);
        assert_eq!(outcome.rules.written.len(), 3);
        assert!(outcome.cursor.join("rules/step-workflow.mdc").is_file());
    }

    #[test]
    fn test_documents_never_contain_sanitized_name() {
        let renderer = TemplateRenderer::new();
        for name in ["High Level", "Third Party", "One Line", "My Test Project"] {
            let dir = tempfile::tempdir().unwrap();
            let identity = ProjectIdentity::new(name);
            let outcome = scaffold(dir.path(), &identity, "", &LayoutConfig::default(), &renderer)
                .unwrap();

            for path in &outcome.documents.written {
                let content = std::fs::read_to_string(path).unwrap();
                assert!(content.contains(name), "{} lacks {name}", path.display());
                assert!(
                    !content.contains(identity.sanitized_name()),
                    "{} contains {}",
                    path.display(),
                    identity.sanitized_name()
                );
            }
        }
    }

    #[test]
    fn test_end_to_end_single_file_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let identity = ProjectIdentity::new("demo");
        let layout = LayoutConfig {
            rules_format: RulesFormat::SingleFile,
            doc_naming: DocNaming::Numbered,
        };

        let outcome = scaffold(dir.path(), &identity, "", &layout, &TemplateRenderer::new()).unwrap();

        assert_eq!(file_names(&outcome.cursor), ["cursor-rules.md"]);
        assert_eq!(outcome.documents.written.len(), 5);
        assert!(outcome.memory_bank.join("01-product-requirements.md").is_file());
        assert!(outcome.memory_bank.join("05-architecture.md").is_file());
    }

    #[test]
    fn test_existing_root_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("demo")).unwrap();

        let err = scaffold(
            dir.path(),
            &ProjectIdentity::new("demo"),
            "",
            &LayoutConfig::default(),
            &TemplateRenderer::new(),
        )
        .unwrap_err();

        assert!(matches!(err, SetupError::ProjectExists { .. }));
        assert!(file_names(&dir.path().join("demo")).is_empty());
    }

    #[test]
    fn test_name_that_sanitizes_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = scaffold(
            dir.path(),
            &ProjectIdentity::new("!!!"),
            "",
            &LayoutConfig::default(),
            &TemplateRenderer::new(),
        )
        .unwrap_err();

        assert!(matches!(err, SetupError::InvalidName(_)));
        assert!(file_names(dir.path()).is_empty());
    }
}
