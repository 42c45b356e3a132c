use crate::domain::{Board, Category, Focus, Item, TaskForm, TaskId, TaskList, TaskRowEvent, UiMode};
use crate::persistence::store::ItemScope;
use crate::persistence::JsonStore;
use anyhow::Result;
use log::{error, info};

/// Input form state for creating an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFormState {
    pub title: String,
    pub category: Category,
}

/// Main application state
pub struct AppState {
    pub board: Board,
    pub store: JsonStore,
    pub selected_item: usize,
    pub selected_task: usize,
    pub focus: Focus,
    pub ui_mode: UiMode,
    pub task_form: TaskForm,
    pub item_form: Option<ItemFormState>,
    pub default_category: Category,
}

impl AppState {
    pub fn new(board: Board, store: JsonStore, default_category: Category) -> Self {
        Self {
            board,
            store,
            selected_item: 0,
            selected_task: 0,
            focus: Focus::Items,
            ui_mode: UiMode::Normal,
            task_form: TaskForm::default(),
            item_form: None,
            default_category,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.board.items.get(self.selected_item)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_item()?
            .tasks
            .get(self.selected_task)
            .map(|t| t.id())
    }

    /// Run `f` against the selected item's task list, backed by the store
    fn with_task_list<R>(
        &mut self,
        f: impl for<'a> FnOnce(&mut TaskList<'a, ItemScope<'a>>) -> R,
    ) -> Option<R> {
        let item = self.board.items.get_mut(self.selected_item)?;
        let mut scope = self.store.scope(item.id);
        let mut list = TaskList::new(&mut item.tasks, &mut scope, &mut self.task_form);
        Some(f(&mut list))
    }

    fn task_count(&self) -> usize {
        self.selected_item().map_or(0, |item| item.tasks.len())
    }

    fn clamp_task_selection(&mut self) {
        let count = self.task_count();
        if count == 0 {
            self.selected_task = 0;
        } else if self.selected_task >= count {
            self.selected_task = count - 1;
        }
    }

    /// Move selection up in the focused pane
    pub fn move_selection_up(&mut self) {
        match self.focus {
            Focus::Items => {
                if self.selected_item > 0 {
                    self.selected_item -= 1;
                    self.selected_task = 0;
                }
            }
            Focus::Tasks => {
                if self.selected_task > 0 {
                    self.selected_task -= 1;
                }
            }
        }
    }

    /// Move selection down in the focused pane
    pub fn move_selection_down(&mut self) {
        match self.focus {
            Focus::Items => {
                if self.selected_item + 1 < self.board.items.len() {
                    self.selected_item += 1;
                    self.selected_task = 0;
                }
            }
            Focus::Tasks => {
                if self.selected_task + 1 < self.task_count() {
                    self.selected_task += 1;
                }
            }
        }
    }

    /// Move focus to the task pane (needs a selected item)
    pub fn focus_tasks(&mut self) {
        if self.selected_item().is_some() {
            self.focus = Focus::Tasks;
            self.clamp_task_selection();
        }
    }

    pub fn focus_items(&mut self) {
        self.focus = Focus::Items;
    }

    /// Start adding a new task (opens the task form)
    pub fn start_add_task(&mut self) {
        if self.with_task_list(|list| list.start_add()).is_some() {
            self.ui_mode = UiMode::TaskForm;
        }
    }

    /// Start editing the selected task
    pub fn start_edit_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.with_task_list(|list| list.start_edit(id)) == Some(true) {
            self.ui_mode = UiMode::TaskForm;
        }
    }

    /// Confirm the task form. Ignored while the name is blank.
    pub fn submit_task_form(&mut self) {
        let submitted = self.with_task_list(|list| {
            let id = list.submit_form()?;
            list.position(id)
        });
        if let Some(Some(index)) = submitted {
            self.selected_task = index;
        }
        if !self.task_form.is_open() {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_task_form(&mut self) {
        if self.with_task_list(|list| list.cancel_form()).is_none() {
            self.task_form.cancel();
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.with_task_list(|list| list.handle_row_event(TaskRowEvent::ToggleCompletion, id));
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.with_task_list(|list| list.delete(id));
            self.clamp_task_selection();
        }
    }

    /// Open the new-item form
    pub fn start_add_item(&mut self) {
        self.item_form = Some(ItemFormState {
            title: String::new(),
            category: self.default_category,
        });
        self.ui_mode = UiMode::ItemForm;
    }

    pub fn item_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.item_form {
            form.title.push(c);
        }
    }

    pub fn item_form_backspace(&mut self) {
        if let Some(form) = &mut self.item_form {
            form.title.pop();
        }
    }

    pub fn item_form_next_category(&mut self) {
        if let Some(form) = &mut self.item_form {
            form.category = form.category.next();
        }
    }

    pub fn item_form_prev_category(&mut self) {
        if let Some(form) = &mut self.item_form {
            form.category = form.category.prev();
        }
    }

    /// Create the item unless the title is blank (form stays open then)
    pub fn submit_item_form(&mut self) {
        let Some(form) = &self.item_form else {
            return;
        };
        if form.title.trim().is_empty() {
            return;
        }
        if let Some(form) = self.item_form.take() {
            self.board.items.push(Item::new(form.title, form.category));
            self.selected_item = self.board.items.len() - 1;
            self.selected_task = 0;
            self.save_board();
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_item_form(&mut self) {
        self.item_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Cycle the selected item's category
    pub fn cycle_item_category(&mut self) {
        if let Some(item) = self.board.items.get_mut(self.selected_item) {
            item.category = item.category.next();
            self.save_board();
        }
    }

    /// Delete the selected item together with its tasks
    pub fn delete_selected_item(&mut self) {
        if self.selected_item >= self.board.items.len() {
            return;
        }
        let removed = self.board.items.remove(self.selected_item);
        info!(
            "event=item_delete item={} tasks={}",
            removed.id,
            removed.tasks.len()
        );
        if self.selected_item >= self.board.items.len() && self.selected_item > 0 {
            self.selected_item -= 1;
        }
        self.selected_task = 0;
        self.focus = Focus::Items;
        self.save_board();
    }

    /// Persist the whole board, logging failures
    fn save_board(&mut self) {
        match self.store.save_board(&self.board) {
            Ok(()) => info!("event=save status=ok origin=board"),
            Err(err) => error!("event=save status=failed origin=board error={}", err),
        }
    }

    /// Final save before exit; unlike in-session saves this reports failure
    pub fn save_on_exit(&mut self) -> Result<()> {
        if self.store.board_has_changes(&self.board) {
            self.store.save_board(&self.board)?;
            info!("event=save status=ok origin=exit");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, AppState) {
        let temp_dir = tempfile::tempdir().unwrap();
        let (store, mut board) = JsonStore::open(temp_dir.path().join("board.json")).unwrap();

        let mut home = Item::new("Home".to_string(), Category::Personal);
        home.tasks.push(Task::new("Task 1", "first"));
        home.tasks.push(Task::new("Task 2", ""));
        board.items.push(home);
        board.items.push(Item::new("Work".to_string(), Category::Work));

        let mut app = AppState::new(board, store, Category::Health);
        app.save_board();
        (temp_dir, app)
    }

    fn reload(app: &AppState) -> Board {
        JsonStore::open(app.store.path()).unwrap().1
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.task_form.push_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let (_dir, app) = create_test_app();
        assert_eq!(app.board.items.len(), 2);
        assert_eq!(app.selected_item, 0);
        assert_eq!(app.focus, Focus::Items);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.task_form.is_open());
    }

    #[test]
    fn test_move_selection() {
        let (_dir, mut app) = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_item, 1);
        app.move_selection_down();
        assert_eq!(app.selected_item, 1);
        app.move_selection_up();
        assert_eq!(app.selected_item, 0);

        app.focus_tasks();
        app.move_selection_down();
        assert_eq!(app.selected_task, 1);
        app.move_selection_down();
        assert_eq!(app.selected_task, 1);
        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn test_add_task_through_form_persists() {
        let (_dir, mut app) = create_test_app();
        app.focus_tasks();

        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::TaskForm);
        type_text(&mut app, "Buy milk");
        app.submit_task_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        let tasks = &app.board.items[0].tasks;
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2].name, "Buy milk");
        assert_eq!(app.selected_task, 2);
        assert_eq!(reload(&app), app.board);
    }

    #[test]
    fn test_blank_task_form_stays_open() {
        let (_dir, mut app) = create_test_app();
        app.start_add_task();
        type_text(&mut app, "   ");
        app.submit_task_form();

        assert_eq!(app.ui_mode, UiMode::TaskForm);
        assert_eq!(app.board.items[0].tasks.len(), 2);

        app.cancel_task_form();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.task_form.is_open());
    }

    #[test]
    fn test_edit_selected_task() {
        let (_dir, mut app) = create_test_app();
        app.focus_tasks();
        app.move_selection_down();
        let id = app.selected_task_id().unwrap();

        app.start_edit_task();
        assert_eq!(app.task_form.name(), "Task 2");
        app.task_form.set_name("Renamed");
        app.submit_task_form();

        let tasks = &app.board.items[0].tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id(), id);
        assert_eq!(tasks[1].name, "Renamed");
        assert_eq!(reload(&app).items[0].tasks[1].name, "Renamed");
    }

    #[test]
    fn test_toggle_and_delete_selected_task() {
        let (_dir, mut app) = create_test_app();
        app.focus_tasks();
        app.move_selection_down();

        app.toggle_selected_task();
        assert!(app.board.items[0].tasks[1].completed);
        assert!(reload(&app).items[0].tasks[1].completed);

        app.delete_selected_task();
        assert_eq!(app.board.items[0].tasks.len(), 1);
        assert_eq!(app.selected_task, 0);
        assert_eq!(reload(&app).items[0].tasks.len(), 1);
    }

    #[test]
    fn test_task_actions_without_tasks_are_noops() {
        let (_dir, mut app) = create_test_app();
        app.move_selection_down();
        app.focus_tasks();

        app.toggle_selected_task();
        app.delete_selected_task();
        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.board.items[1].tasks.is_empty());
    }

    #[test]
    fn test_add_item() {
        let (_dir, mut app) = create_test_app();

        app.start_add_item();
        assert_eq!(app.item_form.as_ref().unwrap().category, Category::Health);
        app.submit_item_form();
        assert_eq!(app.ui_mode, UiMode::ItemForm);

        for c in "Garden".chars() {
            app.item_form_add_char(c);
        }
        app.item_form_next_category();
        app.submit_item_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.board.items.len(), 3);
        assert_eq!(app.selected_item, 2);
        assert_eq!(app.board.items[2].title, "Garden");
        assert_eq!(app.board.items[2].category, Category::Learning);
        assert_eq!(reload(&app).items.len(), 3);
    }

    #[test]
    fn test_delete_item_adjusts_selection() {
        let (_dir, mut app) = create_test_app();
        app.move_selection_down();

        app.delete_selected_item();
        assert_eq!(app.board.items.len(), 1);
        assert_eq!(app.selected_item, 0);

        app.delete_selected_item();
        assert!(app.board.items.is_empty());
        assert!(app.selected_item().is_none());
        assert!(reload(&app).items.is_empty());

        app.focus_tasks();
        assert_eq!(app.focus, Focus::Items);
    }

    #[test]
    fn test_cycle_item_category() {
        let (_dir, mut app) = create_test_app();
        app.cycle_item_category();
        assert_eq!(app.board.items[0].category, Category::Health);
        assert_eq!(reload(&app).items[0].category, Category::Health);
    }

    #[test]
    fn test_save_on_exit_writes_pending_changes() {
        let (_dir, mut app) = create_test_app();
        app.board.items[1].title = "Office".to_string();

        app.save_on_exit().unwrap();
        assert_eq!(reload(&app).items[1].title, "Office");
    }
}
