//! Terminal-backed [`Prompter`] for interactive runs.

use std::io;

use dialoguer::Input;

use vibe_setup_core::prompt::Prompter;

use crate::output;

/// Prompts through `dialoguer`, reports through the colored output helpers.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn warn(&mut self, message: &str) {
        output::print_error(message);
    }

    fn note(&mut self, message: &str) {
        output::print_info(message);
    }
}
