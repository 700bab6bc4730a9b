use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use crate::types::{CellContent, EMPTY_MARKER};

/// Accumulates styled spans, breaking lines on embedded newlines
#[derive(Default)]
struct TextBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl TextBuilder {
    fn push(&mut self, text: &str, style: Style) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn break_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    fn finish(mut self) -> Text<'static> {
        self.break_line();
        Text::from(self.lines)
    }
}

fn push_content(builder: &mut TextBuilder, content: &CellContent) {
    let plain = Style::default();
    match content {
        CellContent::Empty => builder.push(EMPTY_MARKER, plain),
        CellContent::Text(text) => builder.push(text, plain),
        CellContent::EmptyObject => {
            builder.push(EMPTY_MARKER, Style::default().add_modifier(Modifier::ITALIC))
        }
        CellContent::Json(dump) => builder.push(dump, Style::default().fg(Color::Cyan)),
        CellContent::List(items) => {
            builder.push("[", plain);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    builder.push(", ", plain);
                }
                push_content(builder, item);
            }
            builder.push("]", plain);
        }
    }
}

/// Styled, possibly multi-line text for one table cell
pub fn cell_text(content: &CellContent) -> Text<'static> {
    let mut builder = TextBuilder::default();
    push_content(&mut builder, content);
    builder.finish()
}

/// Height of a row: its tallest cell, at least one line
pub fn row_height(cells: &[Text<'_>]) -> u16 {
    cells
        .iter()
        .map(|text| text.height())
        .max()
        .unwrap_or(1)
        .clamp(1, u16::MAX as usize) as u16
}

/// Equal share of the width for every column
pub fn column_widths(columns: usize) -> Vec<Constraint> {
    (0..columns)
        .map(|_| Constraint::Ratio(1, columns as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_list_text_matches_display() {
        let content = CellContent::List(vec![
            CellContent::Text("1".to_string()),
            CellContent::List(vec![CellContent::Empty]),
        ]);
        assert_eq!(plain(&cell_text(&content)), vec![content.to_string()]);
    }

    #[test]
    fn test_json_dump_spans_lines() {
        let content = CellContent::Json("{\n  \"a\": 1\n}".to_string());
        let text = cell_text(&content);
        assert_eq!(plain(&text), vec!["{", "  \"a\": 1", "}"]);
        assert_eq!(row_height(&[text, cell_text(&CellContent::Empty)]), 3);
    }

    #[test]
    fn test_empty_object_is_italic() {
        let text = cell_text(&CellContent::EmptyObject);
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, EMPTY_MARKER);
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_row_height_of_empty_row() {
        assert_eq!(row_height(&[]), 1);
    }

    #[test]
    fn test_column_widths() {
        assert_eq!(column_widths(2), vec![Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]);
        assert!(column_widths(0).is_empty());
    }
}
