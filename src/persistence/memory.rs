use super::store::{StoreError, TaskStore};
use crate::domain::{Task, TaskId};
use std::io;
use std::path::PathBuf;

/// In-memory `TaskStore` that records every call
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub saved: Vec<Task>,
    pub inserted: Vec<TaskId>,
    pub deleted: Vec<TaskId>,
    pub save_calls: usize,
    pub fail_saves: bool,
    dirty: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }
}

impl TaskStore for MemoryStore {
    fn insert(&mut self, task: &Task) {
        self.inserted.push(task.id());
        self.dirty = true;
    }

    fn delete(&mut self, task: &Task) {
        self.deleted.push(task.id());
        self.dirty = true;
    }

    fn has_pending_changes(&self, tasks: &[Task]) -> bool {
        self.dirty || self.saved.as_slice() != tasks
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.save_calls += 1;
        if self.fail_saves {
            return Err(StoreError::Write {
                path: PathBuf::from("memory"),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        self.saved = tasks.to_vec();
        self.dirty = false;
        Ok(())
    }
}
