use serde::Serialize;
use std::fmt;

/// A single value inside a result row. Scalars, `null`, arrays and objects nest freely.
pub type CellValue = serde_json::Value;

/// One row of a result set. Row 0 of a dataset is the header.
pub type Row = Vec<CellValue>;

/// A full result set: header row followed by records.
pub type Dataset = Vec<Row>;

/// Literal shown for `null` cells and for objects without keys.
pub const EMPTY_MARKER: &str = "(empty)";

/// Opaque identifier for a rendered row or cell. Only unique within one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeKey(pub String);

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display form of a cell after recursive formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellContent {
    /// `null`, shown as the plain empty marker.
    Empty,
    /// String, number or boolean in its natural textual form.
    Text(String),
    /// Array elements, shown bracketed and comma separated.
    List(Vec<CellContent>),
    /// Object with zero keys, shown as the emphasized empty marker.
    EmptyObject,
    /// Pretty-printed object dump, shown as a preformatted block.
    Json(String),
}

impl CellContent {
    /// True when the content should be drawn emphasized.
    pub fn is_emphasized(&self) -> bool {
        matches!(self, CellContent::EmptyObject)
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellContent::Empty | CellContent::EmptyObject => f.write_str(EMPTY_MARKER),
            CellContent::Text(text) | CellContent::Json(text) => f.write_str(text),
            CellContent::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyCell {
    pub key: NodeKey,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyRow {
    pub key: NodeKey,
    pub cells: Vec<BodyCell>,
}

/// Output of the table renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableView {
    /// No dataset was supplied; only the fallback message is shown.
    Message { message: String },
    Table {
        header: Vec<HeaderCell>,
        rows: Vec<BodyRow>,
    },
}

impl TableView {
    pub fn is_message(&self) -> bool {
        matches!(self, TableView::Message { .. })
    }

    pub fn header(&self) -> &[HeaderCell] {
        match self {
            TableView::Table { header, .. } => header,
            TableView::Message { .. } => &[],
        }
    }

    pub fn rows(&self) -> &[BodyRow] {
        match self {
            TableView::Table { rows, .. } => rows,
            TableView::Message { .. } => &[],
        }
    }

    /// Widest row, header included. Records may be longer than the header.
    pub fn column_count(&self) -> usize {
        self.rows()
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(self.header().len()))
            .max()
            .unwrap_or(0)
    }
}
