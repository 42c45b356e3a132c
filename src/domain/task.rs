use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a task, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Returns true when `name` may be committed as a task name
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// A sub-task belonging to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// Display name, never blank once committed
    pub name: String,
    /// Free-form notes, may be empty
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build a new task with a fresh identity.
    ///
    /// Name validation belongs to the caller (the form refuses to confirm a
    /// blank name), so this never fails.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }

    /// Assign a fresh identity (used when a loaded board carries duplicates)
    pub(crate) fn regenerate_id(&mut self) {
        self.id = TaskId::new();
    }
}
