//! # Core Application Logic
//!
//! Tasks, the store, the reminder check and the command state machine.
//! It knows nothing about terminals or stdin.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No printing.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    CLI     │
//!                         │  Adapter   │
//!                         │ (stdin/out)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all loop state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`task`]: `Task` and the `YYYY-MM-DD HH:MM` deadline format
//! - [`store`]: Append-only `TaskStore`
//! - [`reminder`]: Overdue / urgent classification
//! - [`command`]: Menu line parsing
//! - [`clock`]: Injectable source of "now"
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod clock;
pub mod command;
pub mod config;
pub mod reminder;
pub mod state;
pub mod store;
pub mod task;
