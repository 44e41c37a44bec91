use contact_form::view::{FieldView, FormView};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};

/// Draw the whole page: form body, then a one-line status bar carrying the
/// most recent announcement.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let [body, status] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());

    let view = app.form().view();
    let editing = match app.focus() {
        Focus::Field(_) => Some(app.input().value()),
        Focus::SaveButton => None,
    };
    let text = Text::from(form_lines(&view, editing, app.focus() == Focus::SaveButton));
    let para = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(para, body);

    draw_status(f, status, app.last_announcement());
}

fn draw_status(f: &mut Frame<'_>, area: Rect, announcement: Option<&str>) {
    let line = match announcement {
        Some(msg) => Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(vec![
            Span::styled("Tab/Shift-Tab", Style::default().fg(Color::White)),
            Span::raw(": Move   "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Save   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .fg(Color::DarkGray),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Lines for the form body. `editing` is the live editor content of the
/// focused field.
pub fn form_lines(view: &FormView, editing: Option<&str>, save_focused: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        view.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if let Some(desc) = &view.description {
        lines.push(Line::from(Span::styled(
            desc.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::raw(""));

    for field in &view.fields {
        field_lines(&mut lines, field, editing.filter(|_| field.focused));
        lines.push(Line::raw(""));
    }

    let button_style = if save_focused {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", view.submit_label),
        button_style,
    )));

    if let Some(summary) = &view.summary {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            summary.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn field_lines(lines: &mut Vec<Line<'static>>, field: &FieldView, editing: Option<&str>) {
    let label_style = if field.focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(field.accessible_name.clone(), label_style)));

    let value = editing.unwrap_or(field.value.as_str());
    let value_style = match (field.focused, field.invalid) {
        (true, _) => Style::default().fg(Color::Black).bg(Color::White),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::Cyan),
    };
    let cursor = if field.focused { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]));

    if let Some(hint) = &field.hint {
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(err) = &field.error_message {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }
}
