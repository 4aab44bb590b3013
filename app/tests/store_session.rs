//! End-to-end session tests: gestures through the store, snapshot out.
//!
//! These drive the real `Store` runtime with deterministic environment
//! mocks, covering the whole session flow including the asynchronous
//! removal confirmation.

#![allow(clippy::unwrap_used)] // Test code can unwrap
#![allow(clippy::expect_used)] // Test code can use expect

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskpad::{
    ConfirmPrompt, DUPLICATE_TASK_NOTICE, FixedDecision, TaskAction, TaskEnvironment, TaskId,
    TaskListState, TaskReducer,
};
use taskpad_runtime::Store;
use taskpad_testing::stepping_clock;

/// Prompt that answers from a script, recording each question
struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, title: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        self.asked.lock().unwrap().push(title.to_string());
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or(false);
        Box::pin(async move { answer })
    }
}

type TaskStore = Store<TaskListState, TaskAction, TaskEnvironment, TaskReducer>;

fn store_with_prompt(prompt: Arc<dyn ConfirmPrompt>) -> TaskStore {
    let env = TaskEnvironment::new(Arc::new(stepping_clock()), prompt);
    Store::new(TaskListState::new(), TaskReducer::new(), env)
}

async fn dispatch(store: &TaskStore, action: TaskAction) {
    let mut handle = store.send(action).await.expect("store accepts actions");
    handle.wait().await;
}

#[tokio::test]
async fn full_session_scenario() {
    // no for the first removal attempt, yes for the second
    let prompt = Arc::new(ScriptedPrompt::new([false, true]));
    let store = store_with_prompt(Arc::clone(&prompt) as Arc<dyn ConfirmPrompt>);

    // add "Buy milk" → one task, not done
    dispatch(
        &store,
        TaskAction::Add {
            title: "Buy milk".to_string(),
        },
    )
    .await;
    let (id, done) = store
        .state(|s| (s.tasks[0].id, s.tasks[0].done))
        .await;
    assert!(!done);
    assert_eq!(store.state(TaskListState::len).await, 1);

    // duplicate add → rejected, still one task, notice set
    dispatch(
        &store,
        TaskAction::Add {
            title: "Buy milk".to_string(),
        },
    )
    .await;
    assert_eq!(store.state(TaskListState::len).await, 1);
    assert_eq!(
        store.state(|s| s.notice.clone()).await.as_deref(),
        Some(DUPLICATE_TASK_NOTICE)
    );

    // toggle → done
    dispatch(&store, TaskAction::ToggleDone { id }).await;
    assert!(store.state(|s| s.tasks[0].done).await);

    // edit → title changes, done stays
    dispatch(
        &store,
        TaskAction::Edit {
            id,
            new_title: "Buy oat milk".to_string(),
        },
    )
    .await;
    let snapshot = store.state(Clone::clone).await;
    assert_eq!(snapshot.titles(), vec!["Buy oat milk"]);
    assert!(snapshot.tasks[0].done);

    // rm answered "no" → task remains, unchanged
    dispatch(&store, TaskAction::Remove { id }).await;
    let after_cancel = store.state(Clone::clone).await;
    assert_eq!(after_cancel.tasks, snapshot.tasks);

    // rm answered "yes" → empty collection
    dispatch(&store, TaskAction::Remove { id }).await;
    assert!(store.state(TaskListState::is_empty).await);

    // The prompt saw the current title both times
    assert_eq!(prompt.asked(), vec!["Buy oat milk", "Buy oat milk"]);
}

#[tokio::test]
async fn removal_of_unknown_id_never_prompts() {
    let prompt = Arc::new(ScriptedPrompt::new([true]));
    let store = store_with_prompt(Arc::clone(&prompt) as Arc<dyn ConfirmPrompt>);

    dispatch(
        &store,
        TaskAction::Add {
            title: "keep me".to_string(),
        },
    )
    .await;

    dispatch(
        &store,
        TaskAction::Remove {
            id: TaskId::from_raw(-1),
        },
    )
    .await;

    assert_eq!(store.state(TaskListState::len).await, 1);
    assert!(prompt.asked().is_empty());
}

#[tokio::test]
async fn inserts_keep_arrival_order_and_distinct_ids() {
    let store = store_with_prompt(Arc::new(FixedDecision(true)));

    for title in ["one", "two", "three"] {
        dispatch(
            &store,
            TaskAction::Add {
                title: title.to_string(),
            },
        )
        .await;
    }

    let snapshot = store.state(Clone::clone).await;
    assert_eq!(snapshot.titles(), vec!["one", "two", "three"]);
    assert!(snapshot.tasks[0].id < snapshot.tasks[1].id);
    assert!(snapshot.tasks[1].id < snapshot.tasks[2].id);
}

#[tokio::test]
async fn removing_middle_task_preserves_neighbours() {
    let store = store_with_prompt(Arc::new(FixedDecision(true)));

    for title in ["a", "b", "c"] {
        dispatch(
            &store,
            TaskAction::Add {
                title: title.to_string(),
            },
        )
        .await;
    }

    let middle = store.state(|s| s.tasks[1].id).await;
    dispatch(&store, TaskAction::Remove { id: middle }).await;

    let titles = store
        .state(|s| s.tasks.iter().map(|t| t.title.clone()).collect::<Vec<_>>())
        .await;
    assert_eq!(titles, vec!["a", "c"]);
}
