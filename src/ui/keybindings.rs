use crate::domain::{Focus, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode and focus
pub fn hint_text(ui_mode: UiMode, focus: Focus) -> &'static str {
    match (ui_mode, focus) {
        (UiMode::TaskForm, _) => " Tab switch field   Enter confirm   Esc cancel",
        (UiMode::ItemForm, _) => " ←/→ category   Enter create   Esc cancel",
        (UiMode::Normal, Focus::Items) => {
            " ↑/↓ select   Enter/Tab open   n new item   c category   x delete item   q quit"
        }
        (UiMode::Normal, Focus::Tasks) => {
            " ↑/↓ select   Space done   a add   e edit   x delete   Tab/Esc items   q quit"
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, focus: Focus, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hint_text(ui_mode, focus))).style(hint_style());
    f.render_widget(paragraph, area);
}
