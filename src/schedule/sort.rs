//! Column sorting with click-to-toggle direction.

use std::cmp::Ordering;

use crate::api::types::{Cell, Row};

/// Which column the rows are ordered by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// The sorted column, if any.
    column: Option<usize>,
    /// Whether the order is descending.
    descending: bool,
}

impl SortState {
    /// Create an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the sorted column.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Whether the current order is descending.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Register an activation of `column`.
    ///
    /// Activating the sorted column again flips the direction; activating any
    /// other column sorts it ascending.
    pub fn toggle(&mut self, column: usize) {
        if self.column == Some(column) {
            self.descending = !self.descending;
        } else {
            self.column = Some(column);
            self.descending = false;
        }
    }

    /// Forget the sorted column.
    pub fn clear(&mut self) {
        self.column = None;
        self.descending = false;
    }

    /// Header indicator for the given column.
    pub fn indicator(&self, column: usize) -> &'static str {
        match self.column {
            Some(c) if c == column && self.descending => " ▼",
            Some(c) if c == column => " ▲",
            _ => "",
        }
    }
}

/// Compare two rows by one column.
///
/// A row too short to have the column sorts as if the cell were empty.
pub fn compare_rows(a: &Row, b: &Row, column: usize, descending: bool) -> Ordering {
    let empty = Cell::Empty;
    let left = a.get(column).unwrap_or(&empty);
    let right = b.get(column).unwrap_or(&empty);

    let ordering = left.compare(right);
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Return a sorted copy of `rows`.
pub fn sort_rows(rows: &[Row], column: usize, descending: bool) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, column, descending));
    sorted
}
