use crate::app::AppState;
use crate::domain::{Focus, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => match app.focus {
            Focus::Items => handle_items_focus(app, key),
            Focus::Tasks => handle_tasks_focus(app, key),
        },
        UiMode::TaskForm => {
            handle_task_form_mode(app, key);
            false
        }
        UiMode::ItemForm => {
            handle_item_form_mode(app, key);
            false
        }
    }
}

/// Handle keys while the items pane has focus
fn handle_items_focus(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Open the selected item's tasks
        KeyCode::Enter | KeyCode::Tab | KeyCode::Right => app.focus_tasks(),

        KeyCode::Char('n') | KeyCode::Char('N') => app.start_add_item(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.cycle_item_category(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected_item(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Handle keys while the task pane has focus
fn handle_tasks_focus(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Completion toggle
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_task(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_task(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected_task()
        }

        KeyCode::Tab | KeyCode::Esc | KeyCode::Left | KeyCode::BackTab => app.focus_items(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Handle keys in the add/edit task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Tab | KeyCode::BackTab => app.task_form.toggle_field(),
        KeyCode::Backspace => app.task_form.backspace(),
        KeyCode::Char(c) => app.task_form.push_char(c),
        _ => {}
    }
}

/// Handle keys in the new-item form
fn handle_item_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_item_form(),
        KeyCode::Esc => app.cancel_item_form(),
        KeyCode::Right | KeyCode::Tab => app.item_form_next_category(),
        KeyCode::Left | KeyCode::BackTab => app.item_form_prev_category(),
        KeyCode::Backspace => app.item_form_backspace(),
        KeyCode::Char(c) => app.item_form_add_char(c),
        _ => {}
    }
}
