use super::files::{atomic_write, read_file};
use crate::domain::{Board, ItemId, Task, TaskId};
use log::{debug, warn};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("item {0} has never been saved")]
    UnknownItem(ItemId),
}

/// Persistence collaborator used by one item's task list.
///
/// Mutating a task in place needs no registration: `has_pending_changes`
/// and `save` receive the live task sequence and compare it with what was
/// last persisted.
pub trait TaskStore {
    /// Register a newly created task
    fn insert(&mut self, task: &Task);
    /// Register a task for deletion
    fn delete(&mut self, task: &Task);
    fn has_pending_changes(&self, tasks: &[Task]) -> bool;
    /// Persist `tasks` as the owner's current sequence. Saving with nothing
    /// pending is harmless.
    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// JSON file store holding the last persisted board
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    snapshot: Board,
    staged: HashSet<(ItemId, TaskId)>,
}

impl JsonStore {
    /// Open the board file at `path`, returning the store and the live board.
    /// A missing file yields an empty board.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<(Self, Board), StoreError> {
        let path = path.as_ref().to_path_buf();
        let content = read_file(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        let snapshot = match content {
            Some(text) if !text.trim().is_empty() => {
                serde_json::from_str::<Board>(&text).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            _ => Board::default(),
        };

        let mut live = snapshot.clone();
        let regenerated = live.ensure_unique_task_ids();
        if regenerated > 0 {
            warn!(
                "event=board_load status=repaired duplicate_task_ids={} path={}",
                regenerated,
                path.display()
            );
        }

        debug!(
            "event=board_load status=ok items={} path={}",
            live.items.len(),
            path.display()
        );

        let store = Self {
            path,
            snapshot,
            staged: HashSet::new(),
        };
        Ok((store, live))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Task store scoped to one item's task sequence
    pub fn scope(&mut self, item: ItemId) -> ItemScope<'_> {
        ItemScope { store: self, item }
    }

    pub fn board_has_changes(&self, board: &Board) -> bool {
        !self.staged.is_empty() || self.snapshot != *board
    }

    /// Persist the whole board (items added, removed or re-categorised)
    pub fn save_board(&mut self, board: &Board) -> Result<(), StoreError> {
        self.write(board)?;
        self.snapshot = board.clone();
        self.staged.clear();
        Ok(())
    }

    fn write(&self, board: &Board) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(board)?;
        atomic_write(&self.path, &json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// `TaskStore` view of a `JsonStore` for a single item
pub struct ItemScope<'a> {
    store: &'a mut JsonStore,
    item: ItemId,
}

impl TaskStore for ItemScope<'_> {
    fn insert(&mut self, task: &Task) {
        debug!("event=task_insert item={} task={}", self.item, task.id());
        self.store.staged.insert((self.item, task.id()));
    }

    fn delete(&mut self, task: &Task) {
        debug!("event=task_delete item={} task={}", self.item, task.id());
        self.store.staged.insert((self.item, task.id()));
    }

    fn has_pending_changes(&self, tasks: &[Task]) -> bool {
        let item = self.item;
        if self.store.staged.iter().any(|(owner, _)| *owner == item) {
            return true;
        }
        match self.store.snapshot.item(item) {
            Some(saved) => saved.tasks.as_slice() != tasks,
            None => true,
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let item = self.item;
        let mut next = self.store.snapshot.clone();
        next.item_mut(item)
            .ok_or(StoreError::UnknownItem(item))?
            .tasks = tasks.to_vec();

        self.store.write(&next)?;
        self.store.snapshot = next;
        self.store.staged.retain(|(owner, _)| *owner != item);
        Ok(())
    }
}
