//! Create/edit form for a single task.
//!
//! The form is either closed or open in one of two modes. While open it
//! keeps its own copy of the name and description being typed; nothing
//! touches a real `Task` until `confirm` succeeds.

use super::task::{is_valid_name, Task, TaskId};
use crate::persistence::TaskStore;
use log::warn;

/// What an open form will do on confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(TaskId),
}

/// Field receiving typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    mode: FormMode,
    name: String,
    description: String,
    field: FormField,
}

impl Draft {
    fn new(mode: FormMode, name: String, description: String) -> Self {
        Self {
            mode,
            name,
            description,
            field: FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    draft: Option<Draft>,
}

impl TaskForm {
    pub fn open_creating(&mut self) {
        self.draft = Some(Draft::new(FormMode::Creating, String::new(), String::new()));
    }

    /// Open seeded with the task's current name and description
    pub fn open_editing(&mut self, task: &Task) {
        self.draft = Some(Draft::new(
            FormMode::Editing(task.id()),
            task.name.clone(),
            task.description.clone(),
        ));
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.draft.as_ref().map(|d| d.mode)
    }

    pub fn name(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.name.as_str())
    }

    pub fn description(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.description.as_str())
    }

    pub fn field(&self) -> FormField {
        self.draft.as_ref().map_or(FormField::Name, |d| d.field)
    }

    /// Confirm is disabled while the name is blank
    pub fn can_submit(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| is_valid_name(&d.name))
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Editing(_)) => "Edit Task",
            _ => "Add Task",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Editing(_)) => "Save",
            _ => "Add",
        }
    }

    pub fn toggle_field(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.field = match draft.field {
                FormField::Name => FormField::Description,
                FormField::Description => FormField::Name,
            };
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(draft) = &mut self.draft {
            match draft.field {
                FormField::Name => draft.name.push(c),
                FormField::Description => draft.description.push(c),
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(draft) = &mut self.draft {
            match draft.field {
                FormField::Name => draft.name.pop(),
                FormField::Description => draft.description.pop(),
            };
        }
    }

    #[cfg(test)]
    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = &mut self.draft {
            draft.name = name.into();
        }
    }

    #[cfg(test)]
    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = &mut self.draft {
            draft.description = description.into();
        }
    }

    /// Close without touching any task
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Apply the draft and close the form, handing back the resulting task.
    ///
    /// Editing mutates the target in `tasks` in place. Creating builds a new
    /// task and registers it with `store`; adding it to `tasks` is left to the
    /// caller. Returns `None` and stays open while the name is blank. Returns
    /// `None` and closes if the edited task has disappeared from `tasks`.
    pub fn confirm<S: TaskStore + ?Sized>(
        &mut self,
        tasks: &mut [Task],
        store: &mut S,
    ) -> Option<Task> {
        if !self.can_submit() {
            return None;
        }
        let draft = self.draft.take()?;

        match draft.mode {
            FormMode::Editing(id) => {
                let Some(existing) = tasks.iter_mut().find(|t| t.id() == id) else {
                    warn!("event=task_form_confirm status=missing_target task={}", id);
                    return None;
                };
                existing.rename(draft.name);
                existing.set_description(draft.description);
                Some(existing.clone())
            }
            FormMode::Creating => {
                let task = Task::new(draft.name, draft.description);
                store.insert(&task);
                Some(task)
            }
        }
    }
}
