// Modal UI components.
// Project detail dialog and the category dropdown.

use ratatui::{prelude::*, widgets::*};

use crate::render::ProjectNode;
use crate::state::ProjectsState;

use super::list::tag_chips;

/// Centered rectangle clamped to `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

/// Draw the project detail modal on top of the current view.
pub fn draw_project_modal(frame: &mut Frame, project: &ProjectNode) {
    let modal_area = centered(frame.area(), 70, 12);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let label = |name: &'static str| Span::styled(name, Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![label("Category  "), Span::raw(&project.category_desc)]),
        Line::from(vec![
            label("Link      "),
            Span::styled(&project.url, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![label("Image     "), Span::raw(&project.image)]),
        Line::from(vec![label("          "), Span::raw(&project.alt)]),
        Line::from(""),
        Line::from(tag_chips(&project.tags)),
    ];

    if let Some(caption) = &project.caption {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Updated {}", caption),
            Style::default().fg(Color::Green),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", project.title))
                .title_bottom(Line::from(" Esc = Close ").alignment(Alignment::Center)),
        );

    frame.render_widget(widget, modal_area);
}

/// Draw the category dropdown.
pub fn draw_category_select(frame: &mut Frame, state: &ProjectsState) {
    let controls = state.filter.controls();
    let height = (controls.len() as u16).saturating_add(2);
    let modal_area = centered(frame.area(), 40, height);

    frame.render_widget(Clear, modal_area);

    let items: Vec<ListItem> = controls
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == state.filter.selected() { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, label))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.select.cursor));

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Select category "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, modal_area, &mut list_state);
}
