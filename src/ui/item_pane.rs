use crate::domain::Item;
use crate::ui::styles::{
    border_style, default_style, empty_state_style, selected_style, title_style,
    unfocused_selected_style,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const NO_ITEMS_HINT: &str = "No items yet. Press n to create one.";

/// Build the line for an item: category marker, title, progress
fn item_line(item: &Item) -> Line<'static> {
    let (done, total) = item.progress();
    Line::from(vec![
        Span::styled("● ".to_string(), Style::default().fg(item.category.color())),
        Span::raw(item.title.clone()),
        Span::raw(format!("  {}/{}", done, total)),
    ])
}

/// Render the items list
pub fn render_item_pane(f: &mut Frame, items: &[Item], selected: usize, focused: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Span::styled(" Items ", title_style(Color::Cyan)));

    if items.is_empty() {
        let hint = Line::from(Span::styled(NO_ITEMS_HINT, empty_state_style()));
        let paragraph = Paragraph::new(hint)
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item_line(item)).style(default_style()))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(if focused {
            selected_style()
        } else {
            unfocused_selected_style()
        });

    let mut state = ListState::default();
    state.select(Some(selected.min(items.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}
