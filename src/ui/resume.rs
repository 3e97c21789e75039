// Resume page: education, experience, and events as plain lists.

use ratatui::{prelude::*, widgets::*};

use crate::records::Timeline;

pub fn draw_resume(frame: &mut Frame, timeline: &Timeline, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let education = timeline
        .education
        .iter()
        .map(|edu| timeline_item(&edu.institution, &edu.duration, &edu.description))
        .collect();
    draw_section(frame, " Education ", education, chunks[0]);

    let experience = timeline
        .experience
        .iter()
        .map(|exp| timeline_item(&exp.role, &exp.date, &exp.description))
        .collect();
    draw_section(frame, " Experience ", experience, chunks[1]);

    let events = timeline
        .events
        .iter()
        .map(|event| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(&event.title, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("  {} · {}", event.category, event.formatted_date),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(format!("  {}", event.description)),
            ])
        })
        .collect();
    draw_section(frame, " Events ", events, chunks[2]);
}

fn timeline_item<'a>(title: &'a str, when: &'a str, description: &'a str) -> ListItem<'a> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", when), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(format!("  {}", description)),
    ])
}

fn draw_section(frame: &mut Frame, title: &str, items: Vec<ListItem>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(title);
    if items.is_empty() {
        let text = Paragraph::new("Nothing to show")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    frame.render_widget(List::new(items).block(block), area);
}
