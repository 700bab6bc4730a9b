use ratatui::{
    widgets::{Block, Borders, List, ListItem, ListState},
    layout::Rect,
    style::{Style, Color, Modifier},
    text::{Line, Span},
    Frame
};
use crate::app::App;
use crate::panel::{PanelSection, PanelView, SectionKind};

fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Labels => "Labels",
        SectionKind::RelationshipTypes => "Relationships",
        SectionKind::Properties => "Properties",
        SectionKind::Details => "Details",
    }
}

/// Flatten the panel into list lines.
///
/// Returns the lines and, for each clickable item, the line it sits on.
pub fn drawer_lines(panel: &PanelView) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut clickable_rows = Vec::new();

    for (i, section) in panel.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        push_section(section, &mut lines, &mut clickable_rows);
    }
    (lines, clickable_rows)
}

fn push_section(section: &PanelSection, lines: &mut Vec<Line<'static>>, clickable_rows: &mut Vec<usize>) {
    // Section containers are disabled; only their items react
    let header_style = if section.disabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(section_title(section.kind).to_uppercase(), header_style)));

    for list in &section.lists {
        lines.push(Line::from(Span::styled(
            list.title.clone(),
            Style::default().fg(Color::Cyan),
        )));
        for item in &list.items {
            if item.is_clickable() {
                clickable_rows.push(lines.len());
                lines.push(Line::from(format!("  {}", item.text)));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("  {}", item.text),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        if let Some(placeholder) = &list.placeholder {
            lines.push(Line::from(Span::styled(
                format!("  {}", placeholder),
                Style::default().add_modifier(Modifier::ITALIC).fg(Color::DarkGray),
            )));
        }
    }
}

/// Render the database information drawer. Only the focused drawer shows a selection.
pub fn render(f: &mut Frame, app: &App, area: Rect, focused: bool) {
    let (lines, clickable_rows) = drawer_lines(&app.panel);
    let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(app.panel.title.clone()),
        );

    let mut state = ListState::default();
    if focused {
        state.select(clickable_rows.get(app.selected_item).copied());
    }
    f.render_stateful_widget(list, area, &mut state);
}
