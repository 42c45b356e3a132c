use crate::app::ItemFormState;
use crate::domain::{FormField, TaskForm};
use crate::ui::{
    layout::create_modal_area,
    styles::{disabled_style, modal_bg_style, modal_title_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label line plus "> value█" line for one form field
fn field_lines<'a>(label: &'a str, value: &'a str, active: bool) -> [Line<'a>; 2] {
    let label = if active {
        Line::raw(format!("{}: (editing)", label))
    } else {
        Line::raw(format!("{}:", label))
    };
    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if active {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ]);
    [label, value]
}

/// Render the add/edit task form
pub fn render_task_form(f: &mut Frame, form: &TaskForm, area: Rect) {
    if !form.is_open() {
        return;
    }
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines("Name", form.name(), form.field() == FormField::Name));
    lines.push(Line::raw(""));
    lines.extend(field_lines(
        "Description",
        form.description(),
        form.field() == FormField::Description,
    ));
    lines.push(Line::raw(""));

    // Confirm is greyed out while the name is blank
    let confirm_style = if form.can_submit() {
        modal_title_style()
    } else {
        disabled_style()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("[Enter] {}", form.confirm_label()), confirm_style),
        Span::raw("  ·  "),
        Span::styled("[Esc] Cancel", modal_title_style()),
        Span::raw("  ·  Tab to switch fields"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", form.title()), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the new-item form
pub fn render_item_form(f: &mut Frame, form: &ItemFormState, area: Rect) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines("Title", &form.title, true));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("Category: < "),
        Span::styled(form.category.name(), title_style(form.category.color())),
        Span::raw(" >"),
    ]));
    lines.push(Line::raw(""));

    let confirm_style = if form.title.trim().is_empty() {
        disabled_style()
    } else {
        modal_title_style()
    };
    lines.push(Line::from(vec![
        Span::styled("[Enter] Create", confirm_style),
        Span::raw("  ·  "),
        Span::styled("[Esc] Cancel", modal_title_style()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" New Item ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
