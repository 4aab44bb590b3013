//! In-memory task list on the taskpad store architecture.
//!
//! Users add, toggle-complete, edit, and remove short text tasks held
//! in memory for the lifetime of the session. The domain core is the
//! [`TaskReducer`]: four pure mutations over an insertion-ordered
//! collection, with removal gated behind a confirmation prompt
//! collaborator. The terminal UI in [`ui`] dispatches gestures to the
//! store and re-renders the full list from each new snapshot.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskpad::{FixedDecision, TaskAction, TaskEnvironment, TaskListState, TaskReducer};
//! use taskpad_core::environment::SystemClock;
//! use taskpad_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TaskEnvironment::new(Arc::new(SystemClock), Arc::new(FixedDecision(true)));
//! let store = Store::new(TaskListState::new(), TaskReducer::new(), env);
//!
//! store.send(TaskAction::Add { title: "Buy milk".to_string() }).await?;
//!
//! let count = store.state(TaskListState::len).await;
//! println!("Tasks: {count}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use reducer::{
    ConfirmPrompt, DUPLICATE_TASK_NOTICE, FixedDecision, TaskAction, TaskEnvironment, TaskReducer,
};
pub use types::{Task, TaskId, TaskListState};
