//! # Actions
//!
//! Everything the user can make happen becomes an `Action`.
//! Picks "1" and types a name and deadline? That's `Action::AddTask`.
//! Stdin closes? That's `Action::InputClosed`.
//!
//! `update()` applies an action to the `App` and returns an `Effect`
//! describing what the adapter should show. No printing here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::core::command::CommandError;
use crate::core::reminder::{self, Notice};
use crate::core::state::{App, LoopMode};
use crate::core::task::{DeadlineError, Task, parse_deadline};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw name and deadline text as typed.
    AddTask { name: String, deadline: String },
    ListTasks,
    /// `now` is sampled once by the caller for the whole pass.
    CheckReminders { now: NaiveDateTime },
    Exit,
    /// Stdin reached EOF.
    InputClosed,
    /// Menu input that did not map to a choice.
    Rejected(CommandError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    TaskAdded { ordinal: usize, task: Task },
    TaskRejected(DeadlineError),
    /// Snapshot of the store in insertion order. Empty means no tasks.
    Listing(Vec<Task>),
    /// Overdue and urgent notices. Empty means nothing urgent.
    Reminders(Vec<Notice>),
    InvalidChoice(CommandError),
    Farewell,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::AddTask { name, deadline } => match parse_deadline(&deadline) {
            Ok(deadline) => {
                let task = Task::new(name, deadline);
                let ordinal = app.store.push(task.clone());
                info!("Added task #{ordinal} '{}' due {}", task.name, task.deadline_text());
                Effect::TaskAdded { ordinal, task }
            }
            Err(e) => {
                info!("Rejected deadline: {e}");
                Effect::TaskRejected(e)
            }
        },
        Action::ListTasks => Effect::Listing(app.store.iter().cloned().collect()),
        Action::CheckReminders { now } => {
            let notices = reminder::check(&app.store, now, app.urgent_window_hours);
            info!(
                "Reminder check at {now}: {} of {} tasks need attention",
                notices.len(),
                app.store.len()
            );
            Effect::Reminders(notices)
        }
        Action::Exit | Action::InputClosed => {
            app.mode = LoopMode::Exited;
            Effect::Farewell
        }
        Action::Rejected(e) => Effect::InvalidChoice(e),
    }
}
