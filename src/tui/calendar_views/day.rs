use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use moncal::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.store.events_on(app.selected_date);

    let day_title = format!("Events on {}", app.selected_date.format("%A, %B %d, %Y"));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(day_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    for event in &events {
        let time_range = format!(
            "{} - {}",
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        );
        lines.push(Line::from(vec![
            Span::styled(time_range, Style::default().fg(app.theme.weekday_header)),
            Span::raw(" "),
            Span::styled(
                &event.title,
                Style::default()
                    .fg(app.theme.category_color(event.category))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({}m)", event.duration_minutes()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        if let Some(description) = &event.description {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(description, Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No Events Present", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
