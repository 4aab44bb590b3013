//! Interactive terminal session for the task list.
//!
//! Reads line commands, dispatches them to the store, and re-renders
//! the whole list from the fresh snapshot after every mutation. The
//! session waits for each action's effects before reading the next
//! command, so removal confirmations resolve in gesture order.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use taskpad::ui::{self, Command, CommandError, TerminalPrompt};
use taskpad::{TaskEnvironment, TaskListState, TaskReducer};
use taskpad_core::environment::SystemClock;
use taskpad_runtime::Store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let env = TaskEnvironment::new(Arc::new(SystemClock), Arc::new(TerminalPrompt));
    let store = Store::new(TaskListState::new(), TaskReducer::new(), env);

    println!("taskpad — in-memory task list (nothing is persisted)");
    println!("{}", ui::HELP);

    loop {
        let Some(line) = read_line("> ").await? else {
            // EOF
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Dispatch(action)) => {
                let mut handle = store.send(action).await?;
                handle.wait().await;
                print!("{}", store.state(ui::render).await);
            },
            Ok(Command::List) => {
                print!("{}", store.state(ui::render).await);
            },
            Ok(Command::Help) => {
                println!("{}", ui::HELP);
            },
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {},
            Err(err) => {
                println!("{err} (try `help`)");
            },
        }
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

/// Prompt and read one line from stdin on the blocking pool
///
/// Returns `None` on end of input.
async fn read_line(prompt: &'static str) -> Result<Option<String>> {
    let line = tokio::task::spawn_blocking(move || {
        use std::io::{BufRead as _, Write as _};

        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(prompt.as_bytes());
        let _ = stdout.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(err) => Err(err),
        }
    })
    .await??;

    Ok(line)
}
