//! Wire envelope and the projected, column-ordered table model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single row as it appears on the wire: an ordered mapping from column
/// name to a displayable JSON value.
///
/// `serde_json` is built with `preserve_order`, so decoding keeps the key
/// order the backend emitted; that order drives the rendered column order.
pub type WireRow = serde_json::Map<String, Value>;

/// Top-level response object wrapping the row sequence under `data`.
///
/// Shape: `{ "data": [ { <col>: <value>, ... }, ... ] }`. The sequence may
/// be empty. Rows are transient: fetched, projected, rendered once, and
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainEnvelope {
    /// Ordered sequence of option-chain rows.
    pub data: Vec<WireRow>,
}

impl ChainEnvelope {
    /// Wrap a row sequence in an envelope.
    #[must_use]
    pub fn new(data: Vec<WireRow>) -> Self {
        Self { data }
    }
}

/// A displayable table cell value.
///
/// The default string conversion (via `Display`) is what ends up between
/// `<td>` tags: text as-is, numbers in their JSON notation, booleans as
/// `true`/`false`, and the empty string for absent or null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Cell {
    /// Plain text.
    Text(String),
    /// A JSON number, displayed in its wire notation (`100`, `0.2`).
    Number(serde_json::Number),
    /// A boolean flag.
    Bool(bool),
    /// No value: the wire row lacked this column, or carried `null`.
    Empty,
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => Self::Number(n.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Empty,
            // Nested structures are not expected in chain rows; fall back to
            // their compact JSON text so they stay displayable.
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Empty => Ok(()),
        }
    }
}

/// An option chain projected into an explicit, column-ordered table.
///
/// `columns` holds the header names, left to right; every row in `rows` has
/// exactly `columns.len()` cells, aligned by position. Projecting every row
/// onto one fixed header keeps the table rectangular even when rows disagree
/// on their key set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainTable {
    /// Ordered header names.
    pub columns: Vec<String>,
    /// Body rows, each aligned to `columns` by position.
    pub rows: Vec<Vec<Cell>>,
}

impl ChainTable {
    /// Project an envelope into a column-ordered table.
    ///
    /// The header is the key sequence of the first row, in wire order. Each
    /// row is then projected onto those columns; a key a later row does not
    /// carry yields [`Cell::Empty`] rather than shifting its neighbours.
    ///
    /// An empty `data` sequence produces the empty table (no columns, no
    /// rows), which renders as a bare `<table></table>`.
    #[must_use]
    pub fn from_envelope(envelope: ChainEnvelope) -> Self {
        let Some(first) = envelope.data.first() else {
            return Self::default();
        };
        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = envelope
            .data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.get(col).map_or(Cell::Empty, Cell::from))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// True when the table has neither columns nor rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

impl From<ChainEnvelope> for ChainTable {
    fn from(envelope: ChainEnvelope) -> Self {
        Self::from_envelope(envelope)
    }
}
