use crate::domain::{Item, Task};
use crate::ui::styles::{
    border_style, default_style, description_style, done_style, empty_state_style,
    selected_style, title_style, unfocused_selected_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub const EMPTY_TITLE: &str = "Task bin is empty";
pub const EMPTY_HINT: &str = "Add a new task by pressing a.";
const NO_ITEM_HINT: &str = "Select or create an item to see its tasks.";

/// Build the line for a single task row
pub fn task_row_line(task: &Task) -> Line<'static> {
    let check = if task.completed { "[x] " } else { "[ ] " };
    let name_style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    let mut spans = vec![
        Span::raw(check.to_string()),
        Span::styled(task.name.clone(), name_style),
    ];
    if !task.description.is_empty() {
        spans.push(Span::styled(
            format!("  · {}", task.description.replace('\n', " ")),
            description_style(),
        ));
    }
    Line::from(spans)
}

/// Render the task pane for the selected item.
/// An item with no tasks shows the empty-state message instead of a list.
pub fn render_task_pane(
    f: &mut Frame,
    item: Option<&Item>,
    selected: usize,
    focused: bool,
    area: Rect,
) {
    let accent = item.map_or(Color::Cyan, |i| i.category.color());
    let title = match item {
        Some(item) => format!(" Tasks · {} ", item.title),
        None => " Tasks ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Span::styled(title, title_style(accent)));

    let Some(item) = item else {
        let hint = Line::from(Span::styled(NO_ITEM_HINT, empty_state_style()));
        let paragraph = Paragraph::new(hint)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    if item.tasks.is_empty() {
        render_empty_state(f, block, area);
        return;
    }

    let rows: Vec<ListItem> = item
        .tasks
        .iter()
        .map(|task| ListItem::new(task_row_line(task)).style(default_style()))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(if focused {
            selected_style()
        } else {
            unfocused_selected_style()
        });

    // Offset follows the selection so the selected row stays on screen
    let mut state = ListState::default();
    state.select(Some(selected.min(item.tasks.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_empty_state(f: &mut Frame, block: Block<'_>, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(EMPTY_TITLE, title_style(Color::Gray))),
        Line::raw(""),
        Line::from(Span::styled(EMPTY_HINT, empty_state_style())),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
