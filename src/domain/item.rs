use super::enums::Category;
use super::task::{Task, TaskId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Stable identity of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A parent item owning an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    /// When the item was created
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Item {
    pub fn new(title: String, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            title,
            category,
            created_at: Local::now(),
            tasks: Vec::new(),
        }
    }

    /// Count of completed tasks and total tasks
    pub fn progress(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (done, self.tasks.len())
    }
}

/// Every item the user has, in display order. This is what gets written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Board {
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Regenerate any task id already seen earlier on the board.
    /// Returns how many tasks were re-keyed.
    pub fn ensure_unique_task_ids(&mut self) -> usize {
        let mut seen: HashSet<TaskId> = HashSet::new();
        let mut regenerated = 0;
        for item in &mut self.items {
            for task in &mut item.tasks {
                while !seen.insert(task.id()) {
                    task.regenerate_id();
                    regenerated += 1;
                }
            }
        }
        regenerated
    }
}
