//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/vibe-setup-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what [`super::context`] provides.

// -------------------------------------------------------
// Memory bank documents
// -------------------------------------------------------

pub const PRODUCT_REQUIREMENTS: &str =
    include_str!("../../../../templates/memory-bank/product-requirements.md.hbs");
pub const TECH_STACK: &str = include_str!("../../../../templates/memory-bank/tech-stack.md.hbs");
pub const IMPLEMENTATION_PLAN: &str =
    include_str!("../../../../templates/memory-bank/implementation-plan.md.hbs");
pub const PROGRESS: &str = include_str!("../../../../templates/memory-bank/progress.md.hbs");
pub const ARCHITECTURE: &str = include_str!("../../../../templates/memory-bank/architecture.md.hbs");

// -------------------------------------------------------
// Cursor rules
// -------------------------------------------------------

pub const RULE_READ_MEMORY_BANK: &str =
    include_str!("../../../../templates/rules/read-memory-bank.mdc.hbs");
pub const RULE_MODULAR_CODE: &str = include_str!("../../../../templates/rules/modular-code.mdc.hbs");
pub const RULE_STEP_WORKFLOW: &str = include_str!("../../../../templates/rules/step-workflow.mdc.hbs");
pub const CURSOR_RULES: &str = include_str!("../../../../templates/rules/cursor-rules.md.hbs");

// -------------------------------------------------------
// Operator output
// -------------------------------------------------------

pub const NEXT_STEPS: &str = include_str!("../../../../templates/instructions/next-steps.txt.hbs");
