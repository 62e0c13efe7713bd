//! Template system for project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, grouped into output file sets by [`sets`], and rendered at runtime
//! with [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! See [`context`] for how the data is assembled.
//! - `{{project_name}}`: the name as the operator typed it
//! - `{{project_description}}`: the free-text description (requirements document only)
//! - `{{dir_name}}`: the sanitized directory name (next-steps text only)
//! - `{{docs.<key>}}`: memory-bank file names under the active naming convention
//! - `{{rules_location}}`: where the rules ended up (next-steps text only)
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.

pub mod context;
pub mod embedded;
pub mod renderer;
pub mod sets;
