//! Handlebars data for the embedded templates.

use serde_json::{json, Value};

use super::sets::{rules_location, DocFileNames};
use crate::config::LayoutConfig;
use crate::name::ProjectIdentity;

/// Build the data context shared by documents, rules, and next-steps text.
///
/// Documents and rules only reference `project_name`, `project_description`,
/// and `docs`; the sanitized `dir_name` is meant for shell examples.
pub fn build(identity: &ProjectIdentity, description: &str, layout: &LayoutConfig) -> Value {
    json!({
        "project_name": identity.original_name(),
        "project_description": description,
        "dir_name": identity.sanitized_name(),
        "docs": DocFileNames::for_naming(layout.doc_naming),
        "rules_location": rules_location(layout.rules_format),
    })
}
