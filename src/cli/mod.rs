//! # CLI Adapter
//!
//! The stdin/stdout layer. Prints the menu, reads lines, turns them into
//! `core::Action` values and prints whatever `Effect` comes back.
//!
//! This is the only module that touches the terminal. `run_session` is
//! generic over reader and writer so the whole loop can be driven from
//! tests with in-memory buffers and a `FixedClock`.

pub mod render;

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::core::action::{Action, update};
use crate::core::clock::{Clock, LocalClock};
use crate::core::command::MenuChoice;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::task::DEADLINE_EXAMPLE;

/// Runs the interactive loop on the process's stdin/stdout until the user
/// exits or input runs out.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut app, &LocalClock)
}

pub fn run_session<R, W, C>(
    mut input: R,
    mut output: W,
    app: &mut App,
    clock: &C,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    info!("Session started (urgent window: {}h)", app.urgent_window_hours);
    writeln!(output, "{}", render::BANNER)?;

    while app.is_running() {
        write!(output, "{}", render::menu())?;
        output.flush()?;

        let action = next_action(&mut input, &mut output, clock)?;
        let effect = update(app, action);
        writeln!(output, "{}", render::effect(&effect))?;
    }

    info!("Session ended with {} task(s) recorded", app.store.len());
    output.flush()
}

/// Reads until one complete action is available. Blank menu lines are
/// skipped; EOF anywhere becomes `Action::InputClosed`.
fn next_action<R, W, C>(input: &mut R, output: &mut W, clock: &C) -> io::Result<Action>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let choice = loop {
        let Some(line) = read_line(input)? else {
            return Ok(Action::InputClosed);
        };
        match MenuChoice::parse(&line) {
            Ok(Some(choice)) => break choice,
            Ok(None) => continue,
            Err(e) => return Ok(Action::Rejected(e)),
        }
    };

    let action = match choice {
        MenuChoice::Add => {
            prompt(output, "Task name: ")?;
            let Some(name) = read_line(input)? else {
                return Ok(Action::InputClosed);
            };
            prompt(output, &format!("Deadline (e.g. {DEADLINE_EXAMPLE}): "))?;
            let Some(deadline) = read_line(input)? else {
                return Ok(Action::InputClosed);
            };
            Action::AddTask { name, deadline }
        }
        MenuChoice::List => Action::ListTasks,
        MenuChoice::Check => Action::CheckReminders { now: clock.now() },
        MenuChoice::Exit => Action::Exit,
    };
    Ok(action)
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{text}")?;
    output.flush()
}

/// One line without its terminator, or `None` at EOF. Invalid UTF-8 is
/// replaced rather than treated as an error.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        debug!("Input closed");
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    let line = String::from_utf8_lossy(&buf).into_owned();
    debug!("Read line: {:?}", line);
    Ok(Some(line))
}
