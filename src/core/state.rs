//! # Application State
//!
//! Everything the command loop owns, in one place:
//!
//! ```text
//! App
//! ├── store: TaskStore            // all tasks, insertion order
//! ├── mode: LoopMode              // Prompting | Exited
//! └── urgent_window_hours: i64    // threshold for "urgent"
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::config::{DEFAULT_URGENT_WINDOW_HOURS, ResolvedConfig};
use crate::core::store::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Prompting,
    Exited,
}

#[derive(Debug)]
pub struct App {
    pub store: TaskStore,
    pub mode: LoopMode,
    pub urgent_window_hours: i64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(i64::from(DEFAULT_URGENT_WINDOW_HOURS))
    }
}

impl App {
    pub fn new(urgent_window_hours: i64) -> Self {
        Self {
            store: TaskStore::new(),
            mode: LoopMode::Prompting,
            urgent_window_hours,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(i64::from(config.urgent_window_hours))
    }

    pub fn is_running(&self) -> bool {
        self.mode == LoopMode::Prompting
    }
}
