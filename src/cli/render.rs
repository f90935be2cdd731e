//! Text for everything the loop prints. Pure functions over core types,
//! so wording lives in one place and is testable without a terminal.

use crate::core::action::Effect;
use crate::core::command::MenuChoice;
use crate::core::reminder::{Notice, Urgency};
use crate::core::task::Task;

pub const BANNER: &str = "=== Welcome to Duely, the homework reminder ===";
pub const FAREWELL: &str = "Goodbye, thanks for using Duely!";
pub const NO_TASKS: &str = "📭 No tasks yet.";
pub const NOTHING_URGENT: &str = "🎉 Nothing is due soon. Relax!";
pub const LIST_HEADING: &str = "=== My Tasks ===";
pub const CHECK_HEADING: &str = "=== ⚠️  Due Soon ===";

/// The menu block, ending in an unterminated prompt.
pub fn menu() -> String {
    let mut out = String::from("\nChoose an option:\n");
    for (key, choice) in MenuChoice::ALL {
        out.push_str(&format!("{key}. {}\n", choice.label()));
    }
    out.push_str("Option: ");
    out
}

pub fn effect(effect: &Effect) -> String {
    match effect {
        Effect::TaskAdded { ordinal, task } => {
            format!("✅ Task #{ordinal} '{}' added.", task.name)
        }
        Effect::TaskRejected(e) => {
            format!("❌ Invalid deadline: {e}. Please add the task again.")
        }
        Effect::Listing(tasks) => listing(tasks),
        Effect::Reminders(notices) => reminders(notices),
        Effect::InvalidChoice(e) => format!("Invalid choice: {e}. Please try again."),
        Effect::Farewell => FAREWELL.to_string(),
    }
}

pub fn listing(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS.to_string();
    }
    let mut lines = vec![format!("\n{LIST_HEADING}")];
    lines.extend(tasks.iter().enumerate().map(|(i, task)| {
        format!("{}. {} | due: {}", i + 1, task.name, task.deadline_text())
    }));
    lines.join("\n")
}

pub fn reminders(notices: &[Notice]) -> String {
    let mut lines = vec![format!("\n{CHECK_HEADING}")];
    if notices.is_empty() {
        lines.push(NOTHING_URGENT.to_string());
    }
    lines.extend(notices.iter().map(notice));
    lines.join("\n")
}

pub fn notice(notice: &Notice) -> String {
    match notice.urgency {
        Urgency::Overdue => format!("[OVERDUE] {} is past its deadline!", notice.name),
        Urgency::Urgent { hours } => {
            format!("[URGENT] {} is due in {hours} hours!", notice.name)
        }
    }
}
