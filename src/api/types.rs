//! Schedule table wire types.
//!
//! These types model the JSON document served by the schedule endpoint:
//!
//! ```json
//! { "caption": "Schedule", "header": ["Day", "Course"], "data": [["Mon", "Math"]] }
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Caption shown before any table has been loaded.
pub const DEFAULT_CAPTION: &str = "Table";

/// A single cell value.
///
/// Cells arrive untyped in JSON, so they are decoded as whichever primitive
/// matches first. `null` decodes to [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A string value. The only kind of cell the search filter looks at.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// An explicit `null`.
    Empty,
}

impl Cell {
    /// Rank used to order cells of different kinds against each other.
    fn rank(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Bool(_) => 1,
            Cell::Number(_) => 2,
            Cell::Text(_) => 3,
        }
    }

    /// Compare two cells using the native ordering of their kind.
    ///
    /// Cells of different kinds are ordered `Empty < Bool < Number < Text`.
    pub fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (Cell::Number(a), Cell::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Bool(a), Cell::Bool(b)) => a.cmp(b),
            (Cell::Empty, Cell::Empty) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Get the text content if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// One record of the schedule table.
///
/// Rows are expected to be as long as the header, but this is not enforced.
pub type Row = Vec<Cell>;

/// The schedule table as served by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table caption, shown as the title.
    #[serde(default = "default_caption")]
    pub caption: String,
    /// Column titles, in display order.
    #[serde(default)]
    pub header: Vec<String>,
    /// Table rows.
    #[serde(default)]
    pub data: Vec<Row>,
}

fn default_caption() -> String {
    DEFAULT_CAPTION.to_string()
}

impl Default for Table {
    fn default() -> Self {
        Self {
            caption: default_caption(),
            header: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl Table {
    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }
}
