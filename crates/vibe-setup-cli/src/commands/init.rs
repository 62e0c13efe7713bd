use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use vibe_setup_core::config::{DocNaming, LayoutConfig, RulesFormat};
use vibe_setup_core::instructions;
use vibe_setup_core::name::ProjectIdentity;
use vibe_setup_core::prompt::{self, LinePrompter, Prompter};
use vibe_setup_core::scaffold;
use vibe_setup_core::templates::renderer::{RenderReport, TemplateRenderer};

use crate::output;
use crate::prompter::TermPrompter;

/// Options for a setup run, as parsed from the command line.
pub struct InitArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub config: Option<PathBuf>,
    pub rules_format: Option<RulesFormat>,
    pub doc_naming: Option<DocNaming>,
}

/// Scaffold a new memory-bank project in the current directory.
///
/// Prompts for whatever was not given on the command line, creates the
/// directory tree, writes the documents and rules, and prints next steps.
/// Per-file write failures are reported but do not fail the run.
pub fn run(args: InitArgs) -> Result<()> {
    output::print_header("Vibe Coding Project Setup");

    let layout = resolve_layout(args.config.as_deref(), args.rules_format, args.doc_naming)?;

    let mut prompter = make_prompter();
    let identity = match args.name {
        Some(name) => identity_from_arg(&name, prompter.as_mut())?,
        None => prompt::collect_name(prompter.as_mut())?,
    };
    let description = match args.description {
        Some(description) => description.trim().to_string(),
        None => prompt::collect_description(prompter.as_mut())?,
    };

    let cwd = std::env::current_dir()?;
    output::print_step(
        1,
        3,
        &format!("Creating project directory: {}/", identity.sanitized_name()),
    );
    output::print_key_value("Rules format", layout.rules_format.as_str());
    output::print_key_value("Doc naming", layout.doc_naming.as_str());

    let renderer = TemplateRenderer::new();
    let outcome = scaffold::scaffold(&cwd, &identity, &description, &layout, &renderer)?;
    output::print_success(&format!("Created project directory: {}", outcome.root.display()));
    output::print_success(&format!("Created subdirectory: {}", outcome.memory_bank.display()));
    output::print_success(&format!("Created subdirectory: {}", outcome.cursor.display()));

    output::print_step(2, 3, "Writing memory bank documents");
    report_files(&outcome.documents);

    output::print_step(3, 3, "Writing Cursor rules");
    report_files(&outcome.rules);

    let next_steps = instructions::render(&renderer, &identity, &layout)?;
    output::print_framed(&next_steps);

    if !outcome.is_complete() {
        output::print_error("Some files could not be written; see the errors above.");
    }

    Ok(())
}

/// Merge defaults, an optional layout file, and explicit flags.
fn resolve_layout(
    config: Option<&Path>,
    rules_format: Option<RulesFormat>,
    doc_naming: Option<DocNaming>,
) -> Result<LayoutConfig> {
    let base = match config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    Ok(base.with_overrides(rules_format, doc_naming))
}

/// Interactive prompts on a terminal, plain line reads when stdin is piped.
fn make_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TermPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

/// Validate and sanitize a name passed with `--name`.
fn identity_from_arg(name: &str, prompter: &mut dyn Prompter) -> Result<ProjectIdentity> {
    let name = name.trim();
    if name.is_empty() {
        bail!("--name cannot be empty");
    }
    let identity = ProjectIdentity::new(name);
    if identity.was_sanitized() {
        prompter.note(&prompt::sanitized_notice(&identity));
    }
    Ok(identity)
}

fn report_files(report: &RenderReport) {
    for path in &report.written {
        output::print_success(&format!("Created file: {}", path.display()));
    }
    for failure in &report.failures {
        output::print_error(&format!(
            "Failed to write {}: {}",
            failure.path.display(),
            failure.error
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl Prompter for Recorder {
        fn ask(&mut self, _prompt: &str) -> io::Result<String> {
            unreachable!("pre-filled names never prompt")
        }

        fn warn(&mut self, message: &str) {
            self.0.push(message.to_string());
        }

        fn note(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn test_resolve_layout_defaults() {
        let layout = resolve_layout(None, None, None).unwrap();
        assert_eq!(layout, LayoutConfig::default());
    }

    #[test]
    fn test_resolve_layout_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r#"{ "rules_format": "single-file", "doc_naming": "numbered" }"#,
        )
        .unwrap();

        let layout = resolve_layout(Some(path.as_path()), None, Some(DocNaming::Plain)).unwrap();
        assert_eq!(layout.rules_format, RulesFormat::SingleFile);
        assert_eq!(layout.doc_naming, DocNaming::Plain);
    }

    #[test]
    fn test_resolve_layout_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(resolve_layout(Some(path.as_path()), None, None).is_err());
    }

    #[test]
    fn test_identity_from_arg() {
        let mut recorder = Recorder(Vec::new());
        let identity = identity_from_arg("  my project ", &mut recorder).unwrap();
        assert_eq!(identity.original_name(), "my project");
        assert_eq!(identity.sanitized_name(), "my-project");
        assert_eq!(recorder.0.len(), 1);
        assert!(recorder.0[0].contains("'my-project'"));

        assert!(identity_from_arg("   ", &mut recorder).is_err());
    }
}
