//! # Tasks and Deadlines
//!
//! A `Task` is a homework item: a free-text name plus a deadline with no
//! timezone attached. Deadlines travel in and out of the program in one
//! fixed textual shape:
//!
//! ```text
//! YYYY-MM-DD HH:MM      e.g. 2026-02-28 23:59
//! ```
//!
//! Parsing is two-step: the shape is checked character by character first,
//! then chrono validates the calendar (no February 30th, no hour 24).

use chrono::NaiveDateTime;
use std::fmt;

/// chrono format string for the deadline text, used for both input and display.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Example shown in the add prompt.
pub const DEADLINE_EXAMPLE: &str = "2026-02-28 23:59";

/// `d` is a digit, anything else must match literally.
const DEADLINE_SHAPE: &[u8] = b"dddd-dd-dd dd:dd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub deadline: NaiveDateTime,
}

impl Task {
    pub fn new(name: impl Into<String>, deadline: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            deadline,
        }
    }

    /// The deadline rendered in the same shape it was entered in.
    pub fn deadline_text(&self) -> String {
        format_deadline(&self.deadline)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// Text does not look like `YYYY-MM-DD HH:MM`.
    Shape(String),
    /// Right shape, but not a real date or time.
    OutOfRange(String),
}

impl fmt::Display for DeadlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineError::Shape(text) => {
                write!(f, "'{text}' is not in YYYY-MM-DD HH:MM format")
            }
            DeadlineError::OutOfRange(text) => {
                write!(f, "'{text}' is not a valid calendar date and time")
            }
        }
    }
}

impl std::error::Error for DeadlineError {}

// ============================================================================
// Parsing / Formatting
// ============================================================================

/// Parses deadline text in the exact `YYYY-MM-DD HH:MM` shape.
pub fn parse_deadline(text: &str) -> Result<NaiveDateTime, DeadlineError> {
    if !has_deadline_shape(text) {
        return Err(DeadlineError::Shape(text.to_string()));
    }
    NaiveDateTime::parse_from_str(text, DEADLINE_FORMAT)
        .map_err(|_| DeadlineError::OutOfRange(text.to_string()))
}

pub fn format_deadline(deadline: &NaiveDateTime) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}

/// chrono accepts single-digit months and longer years, so the field widths
/// are pinned here before handing off.
fn has_deadline_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == DEADLINE_SHAPE.len()
        && bytes
            .iter()
            .zip(DEADLINE_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'd' => b.is_ascii_digit(),
                literal => b == literal,
            })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_valid_deadline() {
        let deadline = parse_deadline("2026-02-28 23:59").unwrap();
        assert_eq!(deadline.year(), 2026);
        assert_eq!(deadline.month(), 2);
        assert_eq!(deadline.day(), 28);
        assert_eq!(deadline.hour(), 23);
        assert_eq!(deadline.minute(), 59);
    }

    #[test]
    fn test_format_matches_input_shape() {
        let deadline = parse_deadline("2026-03-01 07:05").unwrap();
        assert_eq!(format_deadline(&deadline), "2026-03-01 07:05");
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            parse_deadline("not-a-date"),
            Err(DeadlineError::Shape("not-a-date".to_string()))
        );
    }

    #[test]
    fn test_rejects_short_fields() {
        assert!(matches!(
            parse_deadline("2026-2-28 23:59"),
            Err(DeadlineError::Shape(_))
        ));
        assert!(matches!(
            parse_deadline("2026-02-28 9:59"),
            Err(DeadlineError::Shape(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_separators() {
        assert!(matches!(
            parse_deadline("2026/02/28 23:59"),
            Err(DeadlineError::Shape(_))
        ));
        assert!(matches!(
            parse_deadline("2026-02-28T23:59"),
            Err(DeadlineError::Shape(_))
        ));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(parse_deadline(" 2026-02-28 23:59").is_err());
        assert!(parse_deadline("2026-02-28 23:59 ").is_err());
    }

    #[test]
    fn test_rejects_seconds() {
        assert!(parse_deadline("2026-02-28 23:59:00").is_err());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(matches!(
            parse_deadline("2026-02-30 10:00"),
            Err(DeadlineError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_deadline("2026-13-01 10:00"),
            Err(DeadlineError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_deadline("2026-01-01 24:00"),
            Err(DeadlineError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_deadline("2026-01-01 12:60"),
            Err(DeadlineError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_accepts_leap_day() {
        assert!(parse_deadline("2028-02-29 12:00").is_ok());
        assert!(parse_deadline("2026-02-29 12:00").is_err());
    }

    #[test]
    fn test_error_display_mentions_format() {
        let err = parse_deadline("tomorrow").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD HH:MM"));
    }

    #[test]
    fn test_task_deadline_text() {
        let task = Task::new("essay", parse_deadline("2026-10-20 09:00").unwrap());
        assert_eq!(task.deadline_text(), "2026-10-20 09:00");
    }
}
