use ratatui::{
    widgets::{Block, Borders, Paragraph, Table, Row, Cell, TableState, Wrap},
    layout::Rect,
    style::{Style, Color, Modifier},
    Frame
};
use crate::app::App;
use crate::types::TableView;
use crate::ui::utils::{cell_text, column_widths, row_height};

/// Render the result table, or the fallback message when there is no result set
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    match &app.table {
        TableView::Message { message } => render_message(f, message, area),
        view @ TableView::Table { .. } => render_table(f, app, view, area),
    }
}

fn render_message(f: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(paragraph, area);
}

fn render_table(f: &mut Frame, app: &App, view: &TableView, area: Rect) {
    let header_cells: Vec<_> = view
        .header()
        .iter()
        .map(|h| Cell::from(h.label.clone()).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .collect();
    let header = Row::new(header_cells);

    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|row| {
            let texts: Vec<_> = row.cells.iter().map(|cell| cell_text(&cell.content)).collect();
            let height = row_height(&texts);
            Row::new(texts.into_iter().map(Cell::from)).height(height)
        })
        .collect();

    let title = format!("Results ({} rows)", view.rows().len());
    let table = Table::new(rows, column_widths(view.column_count()))
        .header(header)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut table_state = TableState::default();
    table_state.select(app.selected_row);

    f.render_stateful_widget(table, area, &mut table_state);
}
