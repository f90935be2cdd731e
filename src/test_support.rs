//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDateTime;

use crate::core::state::App;
use crate::core::task::parse_deadline;

/// Shorthand for a deadline-formatted timestamp.
pub fn at(text: &str) -> NaiveDateTime {
    parse_deadline(text).expect("test timestamp must be YYYY-MM-DD HH:MM")
}

/// Creates a test App with the default 24 hour window.
pub fn test_app() -> App {
    App::default()
}
