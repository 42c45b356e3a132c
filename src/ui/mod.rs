pub mod input_form;
pub mod item_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod task_pane;

use crate::app::AppState;
use crate::domain::{Focus, UiMode};
use input_form::{render_item_form, render_task_form};
use item_pane::render_item_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use task_pane::render_task_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, app.focus, layout.keybindings_area);

    render_item_pane(
        f,
        &app.board.items,
        app.selected_item,
        app.focus == Focus::Items,
        layout.items_area,
    );
    render_task_pane(
        f,
        app.selected_item(),
        app.selected_task,
        app.focus == Focus::Tasks,
        layout.tasks_area,
    );

    match app.ui_mode {
        UiMode::TaskForm => render_task_form(f, &app.task_form, size),
        UiMode::ItemForm => {
            if let Some(form) = &app.item_form {
                render_item_form(f, form, size);
            }
        }
        UiMode::Normal => {}
    }
}

/// Flatten a test terminal's buffer into newline-separated rows
#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
