//! Pure formatting functions for terminal output.
//!
//! Formatting is separated from printing so the exact strings can be
//! asserted in tests; the display wrappers add styling on top.

use console::style;

use crate::domain::{RateInfo, ReleaseNote};
use crate::session::Comparison;

/// Format the summary line for a comparison.
///
/// Grammar follows the count: "no releases", "1 release", "N releases".
pub fn format_comparison(comparison: &Comparison) -> String {
    match comparison.distance {
        0 => format!(
            "There are no releases between {} and {}",
            comparison.primary_tag, comparison.target_tag
        ),
        1 => format!(
            "There is 1 release between {} and {}",
            comparison.primary_tag, comparison.target_tag
        ),
        n => format!(
            "There are {} releases between {} and {}",
            n, comparison.primary_tag, comparison.target_tag
        ),
    }
}

/// Indent a note body, substituting a placeholder for empty bodies.
pub fn format_note_body(note: &ReleaseNote) -> String {
    if note.body.is_empty() {
        return "  (no release notes)".to_string();
    }
    note.body
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the comparison summary line in bold.
pub fn display_comparison(comparison: &Comparison) {
    println!("{}", style(format_comparison(comparison)).bold());
}

/// Print the release notes between the endpoints, newest first.
pub fn display_notes(notes: &[ReleaseNote]) {
    if notes.is_empty() {
        println!("{}", style("No release notes in between.").dim());
        return;
    }

    for note in notes {
        println!();
        println!("{}", style(&note.tag).cyan().bold());
        println!("{}", format_note_body(note));
    }
}

/// Print the API rate state.
pub fn display_rate(rate: &RateInfo) {
    println!("{}", style(format!("API rate: {}", rate)).dim());
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}
