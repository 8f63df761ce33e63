use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate, Weekday};

use moncal::{
    app::{AppState, Focus},
    ui::month_view,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_name, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Sun ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Mon ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Tue ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Wed ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Thu ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Fri ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(" Sat ", Style::default().fg(app.theme.weekday_header)),
        ]),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            let day_text = if let Some(date) = day_cell.date {
                format!(" {:>2}  ", date.day())
            } else {
                "     ".to_string()
            };

            let mut style = Style::default();

            if day_cell.is_selected {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            if day_cell.has_events {
                if style.fg.is_none() {
                    style = style.fg(app.theme.event_indicator);
                }
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            // Weekend tint is the weakest mark; anything else wins the color.
            if style.fg.is_none()
                && let Some(date) = day_cell.date
                && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            {
                style = style.fg(Color::DarkGray);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(Color::Cyan)),
        Span::raw(" = Navigate | "),
        Span::styled("a", Style::default().fg(Color::Green)),
        Span::raw(" = Add event | "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" = Switch pane | "),
        Span::styled("/", Style::default().fg(Color::Magenta)),
        Span::raw(" = Filter"),
    ]));

    let border_color = if app.focus == Focus::Grid {
        app.theme.title
    } else {
        Color::DarkGray
    };

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border_color)));
    f.render_widget(content, area);
}
