//! # Menu Commands
//!
//! Turns one line of menu input into a `MenuChoice`. Only the first
//! whitespace-separated token counts; anything after it on the same line
//! is dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Check,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [(u8, MenuChoice); 4] = [
        (1, MenuChoice::Add),
        (2, MenuChoice::List),
        (3, MenuChoice::Check),
        (0, MenuChoice::Exit),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a new task",
            MenuChoice::List => "List all tasks",
            MenuChoice::Check => "Check reminders (due soon)",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_number(n: i64) -> Result<Self, CommandError> {
        match n {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::List),
            3 => Ok(MenuChoice::Check),
            0 => Ok(MenuChoice::Exit),
            other => Err(CommandError::UnknownChoice(other.to_string())),
        }
    }

    /// Parses a menu line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let Some(token) = line.split_whitespace().next() else {
            return Ok(None);
        };
        match token.parse::<i64>() {
            Ok(n) => Self::from_number(n).map(Some),
            // Too large for i64 but still a whole number.
            Err(_) if is_integer_literal(token) => {
                Err(CommandError::UnknownChoice(token.to_string()))
            }
            Err(_) => Err(CommandError::NotANumber(token.to_string())),
        }
    }
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Whole number that is not on the menu, as typed.
    UnknownChoice(String),
    /// Token that is not an integer at all.
    NotANumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownChoice(n) => write!(f, "no menu option {n}"),
            CommandError::NotANumber(token) => write!(f, "'{token}' is not a number"),
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Ok(Some(MenuChoice::Add)));
        assert_eq!(MenuChoice::parse("2"), Ok(Some(MenuChoice::List)));
        assert_eq!(MenuChoice::parse("3"), Ok(Some(MenuChoice::Check)));
        assert_eq!(MenuChoice::parse("0"), Ok(Some(MenuChoice::Exit)));
    }

    #[test]
    fn test_parse_ignores_trailing_input() {
        assert_eq!(MenuChoice::parse("  2   and more"), Ok(Some(MenuChoice::List)));
        assert_eq!(MenuChoice::parse("3\r"), Ok(Some(MenuChoice::Check)));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(MenuChoice::parse(""), Ok(None));
        assert_eq!(MenuChoice::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            MenuChoice::parse("4"),
            Err(CommandError::UnknownChoice("4".to_string()))
        );
        assert_eq!(
            MenuChoice::parse("-1"),
            Err(CommandError::UnknownChoice("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_huge_integer_is_unknown_choice() {
        let huge = "99999999999999999999";
        assert_eq!(
            MenuChoice::parse(huge),
            Err(CommandError::UnknownChoice(huge.to_string()))
        );
        assert_eq!(
            MenuChoice::parse("-99999999999999999999"),
            Err(CommandError::UnknownChoice("-99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(
            MenuChoice::parse("abc"),
            Err(CommandError::NotANumber("abc".to_string()))
        );
        assert!(matches!(
            MenuChoice::parse("1.5"),
            Err(CommandError::NotANumber(_))
        ));
        assert!(matches!(
            MenuChoice::parse("-"),
            Err(CommandError::NotANumber(_))
        ));
    }

    #[test]
    fn test_menu_order() {
        let keys: Vec<u8> = MenuChoice::ALL.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 3, 0]);
    }
}
