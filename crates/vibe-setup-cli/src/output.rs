//! Terminal output formatting for the vibe-coding-setup CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

/// Width of the separator lines framing the next-steps text.
const SEPARATOR_WIDTH: usize = 72;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print an informational message prefixed with blue `[INFO]`.
pub fn print_info(text: &str) {
    println!("{} {}", style("[INFO]").blue().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print a progress step indicator like `[1/3] Creating directories...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a block of text between two separator lines.
pub fn print_framed(text: &str) {
    let separator = style("=".repeat(SEPARATOR_WIDTH)).dim();
    println!();
    println!("{separator}");
    println!("{}", text.trim_end());
    println!("{separator}");
    println!();
}
