//! Reducer logic for the task list.
//!
//! Four gestures arrive from the presentation layer: add, toggle,
//! edit, remove. All of them resolve synchronously inside the reducer
//! except removal, which routes through the environment's confirmation
//! prompt as an effect and only mutates state when the prompt answers
//! yes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use taskpad_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

use crate::types::{Task, TaskId, TaskListState};

/// Notice shown when an add is rejected because the title already exists
pub const DUPLICATE_TASK_NOTICE: &str = "You can't add a task with the same name";

/// Confirmation prompt collaborator
///
/// The presentation layer supplies the real implementation (a yes/no
/// dialog); tests supply a deterministic one. The trait is
/// dyn-compatible, so the future is boxed rather than an `async fn`.
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user to confirm removing the task with this title
    ///
    /// Resolves to `true` on an affirmative decision.
    fn confirm(&self, title: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}

/// Prompt that always answers the same way
///
/// Deterministic [`ConfirmPrompt`] for tests and scripted runs.
#[derive(Clone, Copy, Debug)]
pub struct FixedDecision(pub bool);

impl ConfirmPrompt for FixedDecision {
    fn confirm(&self, _title: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        let decision = self.0;
        Box::pin(async move { decision })
    }
}

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for generating creation-time identifiers
    pub clock: Arc<dyn Clock>,
    /// Confirmation prompt for removals
    pub prompt: Arc<dyn ConfirmPrompt>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        Self { clock, prompt }
    }
}

/// Actions dispatched by the presentation layer
///
/// `Remove` is the only action that does not resolve synchronously: it
/// produces a future effect that asks the confirmation prompt and, on
/// yes, feeds `RemoveConfirmed` back into the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Add a task with this title; rejected with a notice if the exact
    /// title already exists
    Add {
        /// Title of the new task
        title: String,
    },

    /// Flip the completion flag of the task with this id (no-op if absent)
    ToggleDone {
        /// Task to toggle
        id: TaskId,
    },

    /// Replace the title of the task with this id (no-op if absent)
    ///
    /// No duplicate-title check is performed on edit; the asymmetry
    /// with `Add` is intentional.
    Edit {
        /// Task to edit
        id: TaskId,
        /// Replacement title
        new_title: String,
    },

    /// Ask to remove the task with this id (no-op if absent)
    Remove {
        /// Task to remove
        id: TaskId,
    },

    /// Feedback action: the prompt confirmed the removal
    RemoveConfirmed {
        /// Task to remove
        id: TaskId,
    },
}

/// Reducer for the task list
#[derive(Clone, Debug, Default)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskAction::Add { title } => {
                if state.contains_title(&title) {
                    tracing::debug!(%title, "Rejected duplicate task");
                    state.notice = Some(DUPLICATE_TASK_NOTICE.to_string());
                    return SmallVec::new();
                }

                let id = TaskId::from_timestamp(env.clock.now());
                state.tasks.push(Task::new(id, title));
                state.notice = None;
                SmallVec::new()
            },

            TaskAction::ToggleDone { id } => {
                if let Some(task) = state.get_mut(id) {
                    task.done = !task.done;
                    state.notice = None;
                }
                SmallVec::new()
            },

            TaskAction::Edit { id, new_title } => {
                if let Some(task) = state.get_mut(id) {
                    task.title = new_title;
                    state.notice = None;
                }
                SmallVec::new()
            },

            TaskAction::Remove { id } => {
                // Nothing to confirm for an unknown id
                let Some(task) = state.get(id) else {
                    return SmallVec::new();
                };

                let title = task.title.clone();
                let prompt = Arc::clone(&env.prompt);
                smallvec![Effect::future(async move {
                    prompt
                        .confirm(&title)
                        .await
                        .then_some(TaskAction::RemoveConfirmed { id })
                })]
            },

            TaskAction::RemoveConfirmed { id } => {
                let before = state.len();
                state.tasks.retain(|t| t.id != id);
                if state.len() < before {
                    state.notice = None;
                }
                SmallVec::new()
            },
        }
    }
}
