use super::task::{Task, TaskId};
use super::task_form::TaskForm;
use crate::persistence::{StoreError, TaskStore};
use log::{debug, error, info, warn};
use thiserror::Error;

/// Event emitted by a rendered task row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRowEvent {
    ToggleCompletion,
}

#[derive(Debug, Error)]
pub enum TaskListError {
    #[error("persistence save failed: {0}")]
    PersistenceSaveFailed(#[from] StoreError),
}

/// Orchestrates add, edit, toggle and delete over one item's tasks.
///
/// Borrows the owner's sequence, the persistence collaborator and the form
/// for the duration of a single user action.
pub struct TaskList<'a, S: TaskStore + ?Sized> {
    tasks: &'a mut Vec<Task>,
    store: &'a mut S,
    form: &'a mut TaskForm,
}

impl<'a, S: TaskStore + ?Sized> TaskList<'a, S> {
    pub fn new(tasks: &'a mut Vec<Task>, store: &'a mut S, form: &'a mut TaskForm) -> Self {
        Self { tasks, store, form }
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    /// Open the form for a new task
    pub fn start_add(&mut self) {
        self.form.open_creating();
    }

    /// Open the form on an existing member. Returns false (form untouched)
    /// when `id` is not in the sequence.
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().find(|t| t.id() == id) {
            Some(task) => {
                self.form.open_editing(task);
                true
            }
            None => {
                warn!("event=task_edit status=not_found task={}", id);
                false
            }
        }
    }

    /// Confirm the open form, apply its result and save.
    /// Returns the id of the task that was added or edited.
    pub fn submit_form(&mut self) -> Option<TaskId> {
        let result = self
            .form
            .confirm(self.tasks.as_mut_slice(), &mut *self.store)?;
        let id = result.id();
        self.apply_form_result(result);
        self.save_context("task_form");
        Some(id)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Replace the member with the same identity in place, or append.
    /// Returns the index the task now occupies.
    pub fn apply_form_result(&mut self, task: Task) -> usize {
        match self.position(task.id()) {
            Some(index) => {
                self.tasks[index] = task;
                index
            }
            None => {
                self.tasks.push(task);
                self.tasks.len() - 1
            }
        }
    }

    pub fn handle_row_event(&mut self, event: TaskRowEvent, id: TaskId) {
        match event {
            TaskRowEvent::ToggleCompletion => {
                self.toggle_completion(id);
            }
        }
    }

    /// Flip completion on the member and save. Returns false if absent.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        task.toggle_completion();
        self.save_context("task_list");
        true
    }

    /// Remove the member, drop it from storage and save. An absent id
    /// leaves the sequence unchanged and has nothing for the store to
    /// drop, so only the save is requested.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let removed = self.position(id).map(|index| self.tasks.remove(index));
        if let Some(task) = &removed {
            self.store.delete(task);
        }
        self.save_context("task_list");
        removed.is_some()
    }

    /// Save if anything is pending. Failures are logged and swallowed; the
    /// in-memory change stands.
    fn save_context(&mut self, origin: &str) {
        match self.try_save() {
            Ok(true) => info!("event=save status=ok origin={}", origin),
            Ok(false) => debug!("event=save status=no_changes origin={}", origin),
            Err(err) => error!("event=save status=failed origin={} error={}", origin, err),
        }
    }

    fn try_save(&mut self) -> Result<bool, TaskListError> {
        if !self.store.has_pending_changes(self.tasks.as_slice()) {
            return Ok(false);
        }
        self.store.save(self.tasks.as_slice())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::memory::MemoryStore;
    use pretty_assertions::assert_eq;

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_add_scenario() {
        let mut tasks = Vec::new();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        list.start_add();
        list.form.set_name("Buy milk");
        list.form.set_description("");
        let id = list.submit_form().unwrap();

        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].id(), id);
        assert_eq!(list.tasks()[0].name, "Buy milk");
        assert!(!list.tasks()[0].completed);
        assert!(!form.is_open());
        assert_eq!(store.inserted, vec![id]);
        assert_eq!(store.saved, tasks);
    }

    #[test]
    fn test_edit_scenario_keeps_identity() {
        let mut tasks = vec![Task::new("X", "")];
        let original = tasks[0].id();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        assert!(list.start_edit(original));
        list.form.set_name("Y");
        assert_eq!(list.submit_form(), Some(original));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id(), original);
        assert_eq!(tasks[0].name, "Y");
        assert_eq!(store.save_calls, 1);
    }

    #[test]
    fn test_submit_with_blank_name_does_nothing() {
        let mut tasks = Vec::new();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        list.start_add();
        list.form.set_name("   ");
        assert_eq!(list.submit_form(), None);
        assert!(list.tasks().is_empty());
        assert!(form.is_open());
        assert_eq!(store.save_calls, 0);
    }

    #[test]
    fn test_start_edit_unknown_task_is_noop() {
        let mut tasks = vec![Task::new("A", "")];
        let before = tasks.clone();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        assert!(!list.start_edit(TaskId::new()));
        assert!(!form.is_open());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_cancel_form_leaves_tasks_alone() {
        let mut tasks = vec![Task::new("A", "a")];
        let before = tasks.clone();
        let id = tasks[0].id();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        list.start_edit(id);
        list.form.set_name("Z");
        list.cancel_form();

        assert!(!form.is_open());
        assert_eq!(tasks, before);
        assert_eq!(store.save_calls, 0);
    }

    #[test]
    fn test_apply_form_result_replace_and_append() {
        let mut tasks = vec![Task::new("A", ""), Task::new("B", ""), Task::new("C", "")];
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        let mut edited = list.tasks()[1].clone();
        edited.rename("B2");
        assert_eq!(list.apply_form_result(edited.clone()), 1);
        assert_eq!(list.tasks().len(), 3);
        assert_eq!(list.tasks()[1], edited);

        let fresh = Task::new("D", "");
        assert_eq!(list.apply_form_result(fresh.clone()), 3);
        assert_eq!(list.tasks().len(), 4);
        assert_eq!(list.tasks()[3], fresh);

        // Re-applying never duplicates an identity
        list.apply_form_result(fresh);
        assert_eq!(list.tasks().len(), 4);
    }

    #[test]
    fn test_toggle_twice_restores_state_and_order() {
        let mut tasks = vec![Task::new("A", ""), Task::new("B", "")];
        tasks[1].toggle_completion();
        let before = tasks.clone();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        for task in before.iter() {
            list.toggle_completion(task.id());
            list.toggle_completion(task.id());
        }
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_toggle_saves_each_time() {
        let mut tasks = vec![Task::new("A", "")];
        let id = tasks[0].id();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        list.handle_row_event(TaskRowEvent::ToggleCompletion, id);
        assert!(list.tasks()[0].completed);
        assert!(!list.toggle_completion(TaskId::new()));

        assert_eq!(store.save_calls, 1);
        assert!(store.saved[0].completed);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut tasks = vec![Task::new("A", ""), Task::new("B", "")];
        let (a, b) = (tasks[0].id(), tasks[1].id());
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        assert!(list.delete(a));
        assert_eq!(ids(list.tasks()), vec![b]);
        assert_eq!(store.deleted, vec![a]);
        assert_eq!(ids(&store.saved), vec![b]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut tasks = vec![Task::new("A", ""), Task::new("B", "")];
        let before = tasks.clone();
        let mut store = MemoryStore::default();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        assert!(!list.delete(TaskId::new()));
        assert_eq!(tasks, before);
        assert!(store.deleted.is_empty());
    }

    #[test]
    fn test_save_failure_keeps_in_memory_change() {
        let mut tasks = vec![Task::new("A", ""), Task::new("B", "")];
        let a = tasks[0].id();
        let b = tasks[1].id();
        let mut store = MemoryStore::failing();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        list.toggle_completion(b);
        list.delete(a);
        list.start_add();
        list.form.set_name("C");
        let c = list.submit_form().unwrap();

        assert_eq!(ids(&tasks), vec![b, c]);
        assert!(tasks[0].completed);
        assert_eq!(store.save_calls, 3);
        assert!(store.saved.is_empty());
    }

    #[test]
    fn test_no_save_when_nothing_pending() {
        let mut tasks = vec![Task::new("A", "")];
        let mut store = MemoryStore::default();
        store.saved = tasks.clone();
        let mut form = TaskForm::default();
        let mut list = TaskList::new(&mut tasks, &mut store, &mut form);

        // Deleting an unknown id changes nothing, so no write happens
        list.delete(TaskId::new());
        assert_eq!(store.save_calls, 0);
    }
}
