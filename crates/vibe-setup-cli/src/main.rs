//! vibe-coding-setup CLI: scaffold a project for AI-assisted "vibe coding".
//!
//! Asks for a project name and description, then creates
//! `<name>/memory-bank/` with five planning documents and `<name>/.cursor/`
//! with rules for the Cursor assistant, and prints what to do next.
//!
//! All scaffolding logic lives in [`vibe_setup_core`]; this binary handles
//! arguments, prompts, terminal output, and the exit status.

mod commands;
mod output;
mod prompter;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use vibe_setup_core::config::{DocNaming, RulesFormat};

use crate::commands::init::InitArgs;

#[derive(Parser)]
#[command(
    name = "vibe-coding-setup",
    about = "Vibe Coding project setup: memory bank documents + Cursor rules",
    version
)]
struct Cli {
    /// Project name (prompted for when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Short project description (prompted for when omitted)
    #[arg(long)]
    description: Option<String>,

    /// Path to a JSON layout file (rules_format, doc_naming)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How Cursor rules are laid out (overrides --config)
    #[arg(long, value_enum)]
    rules_format: Option<RulesFormatChoice>,

    /// Memory bank file naming (overrides --config)
    #[arg(long, value_enum)]
    doc_naming: Option<DocNamingChoice>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RulesFormatChoice {
    Directory,
    SingleFile,
}

impl From<RulesFormatChoice> for RulesFormat {
    fn from(choice: RulesFormatChoice) -> Self {
        match choice {
            RulesFormatChoice::Directory => Self::Directory,
            RulesFormatChoice::SingleFile => Self::SingleFile,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DocNamingChoice {
    Plain,
    Numbered,
}

impl From<DocNamingChoice> for DocNaming {
    fn from(choice: DocNamingChoice) -> Self {
        match choice {
            DocNamingChoice::Plain => Self::Plain,
            DocNamingChoice::Numbered => Self::Numbered,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = InitArgs {
        name: cli.name,
        description: cli.description,
        config: cli.config,
        rules_format: cli.rules_format.map(Into::into),
        doc_naming: cli.doc_naming.map(Into::into),
    };

    exit_code(commands::init::run(args))
}

/// Report a fatal error, if any, and map the run's result to the exit status.
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_layout_flags() {
        let cli = Cli::try_parse_from([
            "vibe-coding-setup",
            "--name",
            "My Project",
            "--rules-format",
            "single-file",
            "--doc-naming",
            "numbered",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.name.as_deref(), Some("My Project"));
        assert_eq!(
            cli.rules_format.map(RulesFormat::from),
            Some(RulesFormat::SingleFile)
        );
        assert_eq!(cli.doc_naming.map(DocNaming::from), Some(DocNaming::Numbered));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_exit_code_success() {
        assert_eq!(exit_code(Ok(())), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_existing_project_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("demo")).unwrap();

        let result = vibe_setup_core::project::create_root(dir.path(), "demo")
            .map(|_| ())
            .map_err(anyhow::Error::from);
        assert!(result.is_err());
        assert_eq!(exit_code(result), ExitCode::FAILURE);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vibe-coding-setup", "--rules-format", "zip"]).is_err());
    }
}
