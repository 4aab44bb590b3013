//! Terminal presentation layer.
//!
//! Rendering is a pure function from the store's snapshot to a string;
//! the whole list is re-rendered after every mutation. Gesture capture
//! is a small line-command grammar. Only `main.rs` touches stdin and
//! stdout — everything here is testable without a terminal.

use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use thiserror::Error;

use crate::reducer::{ConfirmPrompt, TaskAction};
use crate::types::{TaskId, TaskListState};

/// Render the current snapshot as the full screen content
///
/// Header carries the task counter the original screen displays; each
/// row shows the done marker, the id (needed to address toggle/edit/rm
/// commands), and the title; the trailing line surfaces the current
/// notice, if any.
#[must_use]
pub fn render(state: &TaskListState) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tasks: {} ({} done)",
        state.len(),
        state.completed_count()
    );

    for task in &state.tasks {
        let marker = if task.done { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{marker}] {}  {}", task.id, task.title);
    }

    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "! {notice}");
    }

    out
}

/// Errors from the command parser
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line was empty
    #[error("empty input")]
    Empty,

    /// The verb is not part of the grammar
    #[error("unknown command: {0}")]
    Unknown(String),

    /// A required argument is missing
    #[error("missing {0}")]
    MissingArgument(&'static str),

    /// The id argument is not a number
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an action to the store
    Dispatch(TaskAction),
    /// Re-render the list
    List,
    /// Show the command grammar
    Help,
    /// Leave the app
    Quit,
}

impl Command {
    /// Parse a line of user input
    ///
    /// Grammar: `add <title>` | `toggle <id>` | `edit <id> <title>` |
    /// `rm <id>` | `list` | `help` | `quit`.
    ///
    /// A blank title never reaches the store: the original screen's
    /// input component does not submit empty text, so the parser guards
    /// that edge here.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing what was wrong with the
    /// line; the caller prints it and keeps the session going.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("title"));
                }
                Ok(Self::Dispatch(TaskAction::Add {
                    title: rest.to_string(),
                }))
            },
            "toggle" => {
                let id = parse_id(rest)?;
                Ok(Self::Dispatch(TaskAction::ToggleDone { id }))
            },
            "edit" => {
                let (id_part, title) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MissingArgument("title"))?;
                let id = parse_id(id_part)?;
                let title = title.trim();
                if title.is_empty() {
                    return Err(CommandError::MissingArgument("title"));
                }
                Ok(Self::Dispatch(TaskAction::Edit {
                    id,
                    new_title: title.to_string(),
                }))
            },
            "rm" => {
                let id = parse_id(rest)?;
                Ok(Self::Dispatch(TaskAction::Remove { id }))
            },
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(input: &str) -> Result<TaskId, CommandError> {
    if input.is_empty() {
        return Err(CommandError::MissingArgument("id"));
    }
    TaskId::from_str(input).map_err(|_| CommandError::InvalidId(input.to_string()))
}

/// The command grammar, printed on `help` and at startup
pub const HELP: &str = "\
commands:
  add <title>       add a task
  toggle <id>       flip a task's done flag
  edit <id> <title> rename a task
  rm <id>           remove a task (asks for confirmation)
  list              show the list
  help              show this help
  quit              leave";

/// Confirmation prompt backed by the terminal
///
/// Asks on stdout and reads a `y`/`n` line from stdin. Reading happens
/// on the blocking thread pool so the store's effect task is not
/// starved. Any read error counts as a "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, title: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        let question = format!("Remove \"{title}\"? [y/N] ");
        Box::pin(async move {
            let answer = tokio::task::spawn_blocking(move || {
                use std::io::{BufRead as _, Write as _};

                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(question.as_bytes());
                let _ = stdout.flush();

                let mut line = String::new();
                match std::io::stdin().lock().read_line(&mut line) {
                    Ok(_) => line,
                    Err(_) => String::new(),
                }
            })
            .await
            .unwrap_or_default();

            matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        })
    }
}
