//! Terminal output for command results.
//!
//! Results go to stdout, diagnostics to stderr. Colour is applied only when
//! the target stream is a terminal.

use console::style;

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a negative result with red cross.
pub fn display_failure(message: &str) {
    println!("{} {}", style("✗").red(), message);
}

/// Format and print an error message on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().for_stderr(), message);
}
