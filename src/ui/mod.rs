//! User-facing terminal output.
//!
//! All printing flows through `formatter` so the strings themselves stay
//! pure and testable; nothing in this crate prompts for input.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_comparison, display_error, display_notes, display_rate, display_status,
};
