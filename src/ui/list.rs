// Portfolio page rendering.
// Category filter bar plus the project list with loading and error states.

use ratatui::{prelude::*, widgets::*};

use crate::render::{ListEntry, ProjectNode};
use crate::state::{LoadingState, ProjectsState};

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Draw the Portfolio page.
pub fn draw_portfolio(frame: &mut Frame, state: &mut ProjectsState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    draw_filter_bar(frame, state, chunks[0]);

    if matches!(state.status, LoadingState::Idle) {
        render_empty(frame, chunks[1], "Press r to load projects");
    } else if state.status.is_loading() {
        render_loading(frame, chunks[1], "Loading projects");
    } else {
        draw_project_list(frame, state, chunks[1]);
    }
}

/// Draw the category controls with the selected one highlighted.
fn draw_filter_bar(frame: &mut Frame, state: &ProjectsState, area: Rect) {
    let titles: Vec<Line> = state
        .filter
        .controls()
        .iter()
        .map(|label| Line::from(label.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.filter.selected())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" · "));

    frame.render_widget(tabs, area);
}

fn draw_project_list(frame: &mut Frame, state: &mut ProjectsState, area: Rect) {
    // Placeholder replaces the whole list
    if let Some(ListEntry::Placeholder(message)) = state.list.entries().first() {
        render_error(frame, area, message);
        return;
    }

    let items: Vec<ListItem> = state.list.visible_nodes().map(project_item).collect();
    if items.is_empty() {
        render_empty(frame, area, "No projects in this category");
        return;
    }

    let title = format!(
        " Projects ({}/{}) ",
        items.len(),
        state.list.nodes().count()
    );
    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut state.list_state);
}

fn project_item(node: &ProjectNode) -> ListItem<'_> {
    let mut lines = vec![Line::from(vec![
        Span::styled(&node.title, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("  {}", node.category_desc),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if !node.tags.is_empty() {
        lines.push(Line::from(tag_chips(&node.tags)));
    }

    if let Some(caption) = &node.caption {
        lines.push(Line::from(Span::styled(
            format!("  Updated {}", caption),
            Style::default().fg(Color::Green),
        )));
    }

    ListItem::new(lines)
}

/// One styled chip per tag.
pub fn tag_chips(tags: &[String]) -> Vec<Span<'_>> {
    let mut spans = vec![Span::raw("  ")];
    for tag in tags {
        spans.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_chips_keep_duplicates() {
        let tags = vec!["rust".to_string(), "rust".to_string()];
        let spans = tag_chips(&tags);
        let chips: Vec<_> = spans
            .iter()
            .filter(|s| s.content.trim() == "rust")
            .collect();
        assert_eq!(chips.len(), 2);
    }
}
