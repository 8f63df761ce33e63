use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use moncal::app::{AppState, EditorState, FormField};

pub fn render(f: &mut Frame, app: &AppState) {
    let (draft, date, editing) = match &app.editor {
        EditorState::Closed => return,
        EditorState::Creating { date, draft } => (draft, *date, false),
        EditorState::Editing { date, draft, .. } => (draft, *date, true),
    };

    let area = f.size();
    let form_width = 70;
    let form_height = 20;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let field_color = |field: FormField| {
        if draft.active_field == field { active_color } else { inactive_color }
    };

    let form_title = if editing { "Edit Event" } else { "Create New Event" };

    let mut form_text = vec![
        Line::from(vec![
            Span::styled(form_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(field_color(FormField::Title))),
            Span::raw(&draft.title),
            Span::styled(
                if draft.title.is_empty() { " (required)" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(field_color(FormField::Category))),
            Span::styled(
                draft.category.label(),
                Style::default().fg(app.theme.category_color(draft.category)),
            ),
            Span::styled(
                if draft.active_field == FormField::Category { " (Space to change)" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(inactive_color)),
            Span::raw(date.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Start Time: ", Style::default().fg(field_color(FormField::StartTime))),
            Span::raw(&draft.start_input),
            Span::styled(
                if draft.active_field == FormField::StartTime {
                    if draft.start_touched { " (HH:MM or HHMM)" } else { " [type to replace]" }
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("End Time: ", Style::default().fg(field_color(FormField::EndTime))),
            Span::raw(&draft.end_input),
            Span::styled(
                if draft.active_field == FormField::EndTime {
                    if draft.end_touched { " (HH:MM or HHMM)" } else { " [type to replace]" }
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Description: ", Style::default().fg(field_color(FormField::Description))),
            Span::raw(&draft.description),
        ]),
        Line::from(""),
    ];

    if let Some(error) = &app.editor_error {
        form_text.push(Line::from(vec![
            Span::styled(error.to_string(), Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD)),
        ]));
        form_text.push(Line::from(""));
    }

    let mut hints = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" = Next field | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Save | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ];
    if editing {
        hints.push(Span::raw(" | "));
        hints.push(Span::styled("Del", Style::default().fg(Color::Red)));
        hints.push(Span::raw(" = Delete"));
    }
    form_text.push(Line::from(hints));

    let block_title = if editing { " Edit Event " } else { " New Event " };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(block_title)
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
