//! The fixed sets of files a project is seeded with.
//!
//! File names depend on the [`LayoutConfig`]: memory-bank documents may carry
//! numeric prefixes, and rules are either one `.mdc` file per concern or a
//! single consolidated file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::embedded;
use crate::config::{DocNaming, RulesFormat};
use crate::project::RULES_DIR;

/// A template paired with the file name it renders to.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub file_name: String,
    pub template: &'static str,
}

/// Memory-bank documents in their canonical order: (stem, template).
const DOCUMENTS: [(&str, &str); 5] = [
    ("product-requirements", embedded::PRODUCT_REQUIREMENTS),
    ("tech-stack", embedded::TECH_STACK),
    ("implementation-plan", embedded::IMPLEMENTATION_PLAN),
    ("progress", embedded::PROGRESS),
    ("architecture", embedded::ARCHITECTURE),
];

const RULES: [(&str, &str); 3] = [
    ("read-memory-bank.mdc", embedded::RULE_READ_MEMORY_BANK),
    ("modular-code.mdc", embedded::RULE_MODULAR_CODE),
    ("step-workflow.mdc", embedded::RULE_STEP_WORKFLOW),
];

pub const CONSOLIDATED_RULES_FILE: &str = "cursor-rules.md";

fn doc_file_name(index: usize, stem: &str, naming: DocNaming) -> String {
    match naming {
        DocNaming::Plain => format!("{stem}.md"),
        DocNaming::Numbered => format!("{:02}-{stem}.md", index + 1),
    }
}

/// Memory-bank file names, exposed to templates as `{{docs.<key>}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocFileNames {
    pub product_requirements: String,
    pub tech_stack: String,
    pub implementation_plan: String,
    pub progress: String,
    pub architecture: String,
}

impl DocFileNames {
    pub fn for_naming(naming: DocNaming) -> Self {
        let [product_requirements, tech_stack, implementation_plan, progress, architecture] =
            std::array::from_fn(|i| doc_file_name(i, DOCUMENTS[i].0, naming));
        Self {
            product_requirements,
            tech_stack,
            implementation_plan,
            progress,
            architecture,
        }
    }
}

/// The five memory-bank documents.
pub fn documentation_set(naming: DocNaming) -> Vec<TemplateFile> {
    DOCUMENTS
        .iter()
        .enumerate()
        .map(|(i, &(stem, template))| TemplateFile {
            file_name: doc_file_name(i, stem, naming),
            template,
        })
        .collect()
}

/// The Cursor rule files for the given format.
pub fn rule_set(format: RulesFormat) -> Vec<TemplateFile> {
    match format {
        RulesFormat::Directory => RULES
            .iter()
            .map(|&(file_name, template)| TemplateFile {
                file_name: file_name.to_string(),
                template,
            })
            .collect(),
        RulesFormat::SingleFile => vec![TemplateFile {
            file_name: CONSOLIDATED_RULES_FILE.to_string(),
            template: embedded::CURSOR_RULES,
        }],
    }
}

/// Directory the rule set is written into, given the project's `.cursor/`.
pub fn rules_target_dir(cursor_dir: &Path, format: RulesFormat) -> PathBuf {
    match format {
        RulesFormat::Directory => cursor_dir.join(RULES_DIR),
        RulesFormat::SingleFile => cursor_dir.to_path_buf(),
    }
}

/// Project-relative location of the rules, for operator-facing text.
pub fn rules_location(format: RulesFormat) -> String {
    match format {
        RulesFormat::Directory => format!(".cursor/{RULES_DIR}/"),
        RulesFormat::SingleFile => format!(".cursor/{CONSOLIDATED_RULES_FILE}"),
    }
}
