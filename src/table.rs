//! Result-to-table rendering.
//!
//! [`render_table`] turns a dataset into a [`TableView`]: the first row becomes the
//! header, every following row a body row. Cells are formatted recursively by
//! [`format_cell`]. Rendering is total over finite value trees and never touches the
//! caller's rows.

use serde_json::Value;
use tracing::debug;

use crate::keys::{KeyGen, UuidKeys};
use crate::types::{BodyCell, BodyRow, CellContent, CellValue, HeaderCell, Row, TableView};

/// Render a dataset with random node keys.
///
/// `None` yields the fallback message; `Some(&[])` yields an empty table.
pub fn render_table(dataset: Option<&[Row]>, fallback_message: &str) -> TableView {
    render_table_with(dataset, fallback_message, &mut UuidKeys)
}

/// Render a dataset, drawing row and cell keys from `keys`.
pub fn render_table_with<K: KeyGen + ?Sized>(
    dataset: Option<&[Row]>,
    fallback_message: &str,
    keys: &mut K,
) -> TableView {
    let Some(dataset) = dataset else {
        debug!("no dataset, rendering fallback message");
        return TableView::Message {
            message: fallback_message.to_string(),
        };
    };

    let (columns, records) = match dataset.split_first() {
        Some((first, rest)) => (first.as_slice(), rest),
        None => (&[] as &[CellValue], dataset),
    };

    let header = columns
        .iter()
        .enumerate()
        .map(|(index, column)| HeaderCell {
            index,
            label: header_label(column),
        })
        .collect();

    let rows: Vec<BodyRow> = records.iter().map(|record| build_row(record, keys)).collect();

    debug!(
        columns = columns.len(),
        rows = rows.len(),
        "rendered result table"
    );

    TableView::Table { header, rows }
}

fn build_row<K: KeyGen + ?Sized>(record: &[CellValue], keys: &mut K) -> BodyRow {
    let key = keys.next_key();
    let cells = record
        .iter()
        .map(|entry| BodyCell {
            key: keys.next_key(),
            content: format_cell(entry),
        })
        .collect();
    BodyRow { key, cells }
}

/// Column labels are shown as plain text; strings are not quoted.
fn header_label(column: &CellValue) -> String {
    match column {
        Value::String(name) => name.clone(),
        other => format_cell(other).to_string(),
    }
}

/// Format one cell value. `null` is the empty marker at any depth.
///
/// Numbers print as `serde_json` prints them, so `1.0` stays `1.0` rather than `1`.
pub fn format_cell(value: &CellValue) -> CellContent {
    match value {
        Value::Null => CellContent::Empty,
        Value::Bool(b) => CellContent::Text(b.to_string()),
        Value::Number(n) => CellContent::Text(n.to_string()),
        Value::String(s) => CellContent::Text(s.clone()),
        Value::Array(items) => CellContent::List(items.iter().map(format_cell).collect()),
        Value::Object(map) if map.is_empty() => CellContent::EmptyObject,
        Value::Object(_) => CellContent::Json(pretty_dump(value)),
    }
}

/// Two-space indented dump, keys in insertion order.
fn pretty_dump(value: &CellValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
