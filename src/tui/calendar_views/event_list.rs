use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use moncal::app::{AppState, Focus, Mode};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_box(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
}

fn render_filter_box(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let filtering = matches!(app.mode, Mode::Filter);

    let text = if app.filter.is_empty() && !filtering {
        Span::styled("press / to filter by title", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.filter.as_str(), Style::default().fg(app.theme.command_mode))
    };

    let border_color = if filtering { app.theme.title } else { Color::DarkGray };

    let filter_box = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Filter")
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(filter_box, area);
}

fn render_list(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.filtered_events();

    let title = format!("All Events ({})", events.len());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No Events Present", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        let selected_base = Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let when = format!(
                "{} {} - {}",
                event.start.format("%b %d"),
                event.start.format("%H:%M"),
                event.end.format("%H:%M")
            );
            let is_selected = idx == app.selected_event_index;

            let (when_style, title_style) = if is_selected {
                (selected_base.fg(Color::Black), selected_base.fg(Color::Black))
            } else {
                (
                    Style::default().fg(Color::Green),
                    Style::default().fg(app.theme.category_color(event.category)),
                )
            };

            let cursor = if is_selected { ">" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(when, when_style),
                Span::raw(" "),
                Span::styled(&event.title, title_style),
            ]));

            if let Some(description) = &event.description {
                let desc_style = if is_selected {
                    Style::default().bg(app.theme.selected_bg).fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                lines.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled(description, desc_style),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" = Navigate | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Edit"),
        ]));
    }

    let border_color = if app.focus == Focus::Events {
        app.theme.title
    } else {
        Color::DarkGray
    };

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(content, area);
}
