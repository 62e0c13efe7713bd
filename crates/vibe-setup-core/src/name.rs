//! Project name sanitization.
//!
//! The human-entered name is kept for generated prose; the sanitized form is
//! used as the directory name and inside shell-command examples.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9_-]").unwrap();
}

/// Rewrite an arbitrary name into a filesystem- and shell-safe token.
///
/// Spaces become hyphens, anything outside `[A-Za-z0-9_-]` is dropped, and
/// leading/trailing hyphens are stripped. Runs of hyphens inside the name are
/// left alone. The result may be empty.
pub fn sanitize(name: &str) -> String {
    let hyphenated = name.replace(' ', "-");
    let filtered = DISALLOWED.replace_all(&hyphenated, "");
    filtered.trim_matches('-').to_string()
}

/// A project name in both of its forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    original_name: String,
    sanitized_name: String,
}

impl ProjectIdentity {
    /// Build an identity from the name as the operator typed it.
    pub fn new(original_name: impl Into<String>) -> Self {
        let original_name = original_name.into();
        let sanitized_name = sanitize(&original_name);
        Self {
            original_name,
            sanitized_name,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn sanitized_name(&self) -> &str {
        &self.sanitized_name
    }

    /// Whether sanitization had to change the name.
    pub fn was_sanitized(&self) -> bool {
        self.original_name != self.sanitized_name
    }
}
