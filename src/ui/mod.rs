// UI module for rendering the TUI.
// Contains widgets for the page tabs, project list, resume, sidebar, and modals.

mod list;
mod modal;
mod resume;
mod sidebar;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Page};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    // Sidebar takes a fixed column on the left when open
    let content_area = if app.sidebar.open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(1)])
            .split(chunks[1]);
        sidebar::draw_sidebar(frame, app, columns[0]);
        columns[1]
    } else {
        chunks[1]
    };

    match app.active_page {
        Page::Portfolio => list::draw_portfolio(frame, &mut app.projects, content_area),
        Page::Resume => resume::draw_resume(frame, &app.timeline, content_area),
    }

    draw_status_bar(frame, app, chunks[2]);

    // Overlays (rendered last, on top of everything)
    if app.projects.select.open {
        modal::draw_category_select(frame, &app.projects);
    }
    if let Some(project) = app.modal.project.as_ref().filter(|_| app.modal.open) {
        modal::draw_project_modal(frame, project);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab "),
        Span::styled("Page", Style::default().fg(Color::DarkGray)),
    ];

    if app.active_page == Page::Portfolio {
        hints.extend([
            Span::raw("  ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ←→ "),
            Span::styled("Filter", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Details", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Reload", Style::default().fg(Color::DarkGray)),
        ]);
    }

    hints.extend([
        Span::raw("  s "),
        Span::styled("Sidebar", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 50;
    let popup_height = 16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  Tab/S-Tab     ", "Switch page"),
        key("  ↑/↓ or j/k    ", "Navigate projects"),
        key("  ←/→ or h/l    ", "Previous/next category"),
        key("  f             ", "Choose category from list"),
        key("  Enter         ", "Project details"),
        key("  Esc           ", "Close dialog"),
        key("  r             ", "Reload projects"),
        key("  s             ", "Toggle sidebar"),
        key("  ?             ", "Show this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );

    frame.render_widget(help_paragraph, popup_area);
}
