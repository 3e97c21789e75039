// Sidebar with the latest pass summary and API quota.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::LoadingState;

pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let row = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    let mut lines = match &app.projects.status {
        LoadingState::Loaded(report) => {
            vec![
                row("Projects", report.projects.to_string()),
                row("Updated", report.resolved.to_string()),
                row("Cached", report.cache_hits.to_string()),
                row("Fetched", report.fetched.to_string()),
                row("Failed", report.failures.to_string()),
                row("No repo", report.without_repo.to_string()),
            ]
        }
        LoadingState::Loading => vec![Line::from("Loading...")],
        LoadingState::Error(e) => vec![Line::from(Span::styled(
            e.clone(),
            Style::default().fg(Color::Red),
        ))],
        LoadingState::Idle => vec![Line::from("No pass yet")],
    };

    let rate = app.rate_limit();
    if rate.seen {
        let color = if rate.is_exhausted() {
            Color::Red
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(color),
        )));
        if rate.is_exhausted() {
            lines.push(Line::from(Span::styled(
                format!("Resets at {}", rate.reset_display()),
                Style::default().fg(color),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Summary "));
    frame.render_widget(widget, area);
}
