//! In-memory task board.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use kiosk_core::TaskId;

/// Errors surfaced by task operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// No task carries the requested id.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// The task already collected its maximum number of submissions.
    #[error("max submissions reached for task {0}")]
    SubmissionsExhausted(TaskId),
}

/// A task accepting a bounded number of submissions.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub max_submissions: u32,
    pub submissions_count: u32,
}

/// Owns the task list and its auto-increment id counter.
///
/// The whole board sits behind one `Mutex`: the cap check and the counter
/// increment must be atomic so two concurrent submissions cannot both pass
/// the check and push the count over the cap.
pub struct TaskBoard {
    inner: Mutex<BoardInner>,
}

struct BoardInner {
    tasks: Vec<Task>,
    next_id: i64,
}

impl TaskBoard {
    /// Create a board holding the default sample task.
    #[must_use]
    pub fn new() -> Self {
        let board = Self::empty();
        board.create("Sample Task", "Demo", 3);
        board
    }

    /// Create a board with no tasks.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(BoardInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append a task and return it with its assigned id.
    ///
    /// A cap below 1 is raised to 1.
    pub fn create(&self, title: &str, description: &str, max_submissions: u32) -> Task {
        let mut inner = self.lock();
        let task = Task {
            id: TaskId::new(inner.next_id),
            title: title.to_owned(),
            description: description.to_owned(),
            max_submissions: max_submissions.max(1),
            submissions_count: 0,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// All tasks in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Look up one task by id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] when no task has the id.
    pub fn get(&self, id: TaskId) -> Result<Task, TaskError> {
        self.lock()
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or(TaskError::TaskNotFound(id))
    }

    /// Count a submission against a task and return the new count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] for an unknown id, or
    /// [`TaskError::SubmissionsExhausted`] once the cap is reached; the
    /// count is never incremented past the cap.
    pub fn submit(&self, id: TaskId) -> Result<u32, TaskError> {
        let mut inner = self.lock();
        let task = inner
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::TaskNotFound(id))?;

        if task.submissions_count >= task.max_submissions {
            return Err(TaskError::SubmissionsExhausted(id));
        }

        task.submissions_count += 1;
        Ok(task.submissions_count)
    }

    fn lock(&self) -> MutexGuard<'_, BoardInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}
