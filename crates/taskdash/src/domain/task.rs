//! Task records and the in-memory task list store.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Errors surfaced by task list mutations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TaskError {
    #[error("Task cannot be empty")]
    EmptyTitle,
}

/// Opaque, time-derived task identifier.
///
/// Two tasks created within the same millisecond must still get distinct
/// ids, so the epoch-millisecond stamp carries a per-store sequence suffix.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TaskId(String);

impl TaskId {
    fn next(seq: u64) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        Self(format!("{millis}-{seq}"))
    }

    /// Returns the id as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do entry, exclusively owned by [`TaskList`].
///
/// `id` and `title` are fixed at creation; only `completed` changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
    pub completed: bool,
    pub id: TaskId,
    pub title: String,
}

/// Ordered in-memory task store. Holds nothing across process restarts.
#[derive(Default)]
pub struct TaskList {
    next_seq: u64,
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task and returns a snapshot of it.
    ///
    /// Blank or whitespace-only titles are rejected; the stored title keeps
    /// the caller's text verbatim.
    pub fn add(&mut self, title: &str) -> Result<Task, TaskError> {
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let task = Task {
            completed: false,
            id: TaskId::next(self.next_seq),
            title: title.to_string(),
        };
        self.next_seq += 1;
        self.tasks.push(task.clone());

        Ok(task)
    }

    /// Flips the completed flag of the task with the given id.
    ///
    /// Unknown ids are silently ignored.
    pub fn toggle(&mut self, id: &TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Removes the task with the given id. Idempotent; unknown ids are
    /// silently ignored.
    pub fn remove(&mut self, id: &TaskId) {
        self.tasks.retain(|task| &task.id != id);
    }

    /// Counts completed tasks. Recomputed from current state, never cached.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Returns the number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task at the given list position.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns all tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
