//! Table content types

use super::inline::InlineSegment;
use serde::Deserialize;

/// Content of a table block (`{"type": "tableContent", "rows": [...]}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableContent {
    /// Rows in display order
    pub rows: Vec<TableRow>,
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableRow {
    /// Cell groups in column order
    pub cells: Vec<CellGroup>,
}

/// The content of one table cell
///
/// Older editor versions store a cell as a bare array of segments; newer ones
/// wrap it in a `tableCell` object. Both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellGroup {
    /// A bare sequence of segments
    Segments(Vec<InlineSegment>),

    /// A `tableCell` object
    Cell {
        /// Segments of the cell
        #[serde(default)]
        content: Vec<InlineSegment>,
    },
}

impl CellGroup {
    /// The segments making up this cell
    pub fn segments(&self) -> &[InlineSegment] {
        match self {
            CellGroup::Segments(segments) | CellGroup::Cell { content: segments } => segments,
        }
    }
}

impl From<Vec<InlineSegment>> for CellGroup {
    fn from(segments: Vec<InlineSegment>) -> Self {
        CellGroup::Segments(segments)
    }
}

impl TableContent {
    /// Number of columns of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }
}
