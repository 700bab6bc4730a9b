pub mod results;
pub mod drawer;

use ratatui::{
    widgets::{Block, Borders, Paragraph, Tabs},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::{Line, Span},
    Frame
};
use crate::app::{App, Tab};

/// Render the full interface for the active tab
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Table and/or drawer
                Constraint::Length(3), // Editor
                Constraint::Length(3), // Footer / notification
            ]
            .as_ref(),
        )
        .split(f.size());

    render_tabs(f, app, main_chunks[0]);

    match app.active_tab {
        Tab::Results if app.show_drawer => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
                .split(main_chunks[1]);
            results::render(f, app, content_chunks[0]);
            drawer::render(f, app, content_chunks[1], false);
        }
        Tab::Results => results::render(f, app, main_chunks[1]),
        Tab::Info => drawer::render(f, app, main_chunks[1], true),
    }

    render_editor(f, app, main_chunks[2]);
    render_footer(f, app, main_chunks[3]);
}

/// Render the tab bar with the time of the last load
fn render_tabs(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let titles = [Tab::Results, Tab::Info].iter().map(|t| Line::from(t.name())).collect::<Vec<_>>();
    let selected = match app.active_tab {
        Tab::Results => 0,
        Tab::Info => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("queryview | loaded {}", app.loaded_at.format("%H:%M:%S"))),
        );
    f.render_widget(tabs, area);
}

/// Render the editor bar holding the last command sent from the drawer
fn render_editor(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let line = match &app.editor_content {
        Some(content) => Line::from(vec![
            Span::styled("$ ", Style::default().fg(Color::Green)),
            Span::raw(content.clone()),
        ]),
        None => Line::from(Span::styled(
            "Select a drawer item and press Enter",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let editor = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Editor"));
    f.render_widget(editor, area);
}

/// Key help for the active tab. Drawer items only take Enter on the info tab.
pub fn footer_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Results => "q: quit | Tab: Database Information (run items) | ↑/↓: select row | d: drawer | r: reload",
        Tab::Info => "q: quit | Tab: switch view | ↑/↓: select item | Enter: run item | d: drawer | r: reload",
    }
}

/// Render the footer, or the latest notification when there is one
fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if let Some(msg) = &app.notification {
        let notification = Paragraph::new(msg.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(notification, area);
    } else {
        let footer = Paragraph::new(footer_text(app.active_tab)).block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }
}
