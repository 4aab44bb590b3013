//! Domain types for the task list.
//!
//! A task list is an insertion-ordered collection of tasks, each
//! carrying an identifier, a title, and a completion flag — nothing
//! more. The collection is owned by the store and replaced through the
//! reducer; nothing else aliases it.

use serde::{Deserialize, Serialize};
use taskpad_core::{DateTime, Utc};

/// Unique identifier for a task
///
/// Assigned at creation time from the environment clock as epoch
/// milliseconds, so ids increase monotonically with creation order.
/// Two tasks created within the same clock tick would collide; that is
/// an accepted limitation of the scheme, not a guarantee the rest of
/// the system relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a `TaskId` from a creation timestamp
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Creates a `TaskId` from a raw value
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Title of the task
    pub title: String,
    /// Whether the task is completed
    pub done: bool,
}

impl Task {
    /// Creates a new task, not yet done
    #[must_use]
    pub const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }
}

/// State of the task list
///
/// Insertion-ordered: new tasks append at the end, and toggling or
/// editing never reorders. `notice` carries the last user-facing
/// notice (the duplicate-title rejection); it is cleared by the next
/// successful mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Last user-facing notice (if any)
    pub notice: Option<String>,
}

impl TaskListState {
    /// Creates a new empty task list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            notice: None,
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns a mutable task by id
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Checks whether any task carries exactly this title
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    /// Returns the titles in insertion order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.title.as_str()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use taskpad_testing::test_epoch;

    #[test]
    fn task_id_from_timestamp_is_epoch_millis() {
        let at = test_epoch();
        let id = TaskId::from_timestamp(at);
        assert_eq!(id.as_i64(), at.timestamp_millis());
    }

    #[test]
    fn task_id_display_round_trips_through_from_str() {
        let id = TaskId::from_raw(1_735_689_600_000);
        let parsed: TaskId = id.to_string().parse().expect("display output parses");
        assert_eq!(parsed, id);
    }

    #[test]
    fn new_task_is_not_done() {
        let task = Task::new(TaskId::from_raw(1), "Buy milk".to_string());
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn state_accessors() {
        let mut state = TaskListState::new();
        assert!(state.is_empty());
        assert_eq!(state.completed_count(), 0);

        state.tasks.push(Task::new(TaskId::from_raw(1), "a".into()));
        state.tasks.push(Task {
            id: TaskId::from_raw(2),
            title: "b".into(),
            done: true,
        });

        assert_eq!(state.len(), 2);
        assert_eq!(state.completed_count(), 1);
        assert!(state.contains_title("a"));
        assert!(!state.contains_title("A"));
        assert_eq!(state.titles(), vec!["a", "b"]);
        assert_eq!(state.get(TaskId::from_raw(2)).map(|t| t.done), Some(true));
        assert!(state.get(TaskId::from_raw(99)).is_none());
    }
}
