//! Interactive collection of the project name and description.
//!
//! The collector only knows about the [`Prompter`] trait. The CLI plugs in a
//! terminal prompter; [`LinePrompter`] serves piped stdin and tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::name::ProjectIdentity;

pub const NAME_PROMPT: &str = "Enter project name";
pub const DESCRIPTION_PROMPT: &str = "Enter a brief project description";
pub const EMPTY_NAME_MESSAGE: &str = "Project name cannot be empty. Please try again.";

/// A source of answers plus a place to report back to the operator.
pub trait Prompter {
    /// Show `prompt` and return one raw line of input.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Report a recoverable problem with the last answer.
    fn warn(&mut self, message: &str);

    /// Report an informational notice.
    fn note(&mut self, message: &str);
}

/// Prompt until a non-empty name is given, then sanitize it.
pub fn collect_name(prompter: &mut dyn Prompter) -> Result<ProjectIdentity> {
    loop {
        let answer = prompter.ask(NAME_PROMPT)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            prompter.warn(EMPTY_NAME_MESSAGE);
            continue;
        }

        let identity = ProjectIdentity::new(trimmed);
        if identity.was_sanitized() {
            prompter.note(&sanitized_notice(&identity));
        }
        debug!(
            original = identity.original_name(),
            sanitized = identity.sanitized_name(),
            "collected project name"
        );
        return Ok(identity);
    }
}

/// Ask once for a description. Anything is accepted, including nothing.
///
/// Closed input counts as an empty description.
pub fn collect_description(prompter: &mut dyn Prompter) -> Result<String> {
    match prompter.ask(DESCRIPTION_PROMPT) {
        Ok(answer) => Ok(answer.trim().to_string()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// The one-line notice shown when the directory name differs from the input.
pub fn sanitized_notice(identity: &ProjectIdentity) -> String {
    format!(
        "Project name sanitized to '{}' for directory creation",
        identity.sanitized_name()
    )
}

/// Line-oriented prompter over any reader/writer pair.
///
/// End of input is reported as [`io::ErrorKind::UnexpectedEof`] so a closed
/// stdin cannot spin the name loop forever.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what a test printed.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn warn(&mut self, message: &str) {
        let _ = writeln!(self.writer, "Error: {message}");
    }

    fn note(&mut self, message: &str) {
        let _ = writeln!(self.writer, "Note: {message}");
    }
}
