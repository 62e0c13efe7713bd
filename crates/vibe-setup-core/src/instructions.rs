//! Post-run "next steps" text shown to the operator.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::name::ProjectIdentity;
use crate::templates::renderer::TemplateRenderer;
use crate::templates::{context, embedded};

/// Render the next-steps message for a freshly scaffolded project.
///
/// The human-readable name appears in prose; the sanitized name appears in
/// the example shell commands.
pub fn render(
    renderer: &TemplateRenderer,
    identity: &ProjectIdentity,
    layout: &LayoutConfig,
) -> Result<String> {
    let data = context::build(identity, "", layout);
    renderer.render(embedded::NEXT_STEPS, &data)
}
