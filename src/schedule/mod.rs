//! Schedule table view state.
//!
//! This module holds the loaded table together with the user's view state:
//! - Sort column and direction, toggled by header activation
//! - The current column shown on narrow viewports
//! - The live search term
//!
//! Everything here is a plain in-memory state machine; rendering lives in
//! `ui::views::schedule`.

mod filter;
mod sort;
mod window;

pub use filter::{filter_rows, row_matches};
pub use sort::{compare_rows, sort_rows, SortState};
pub use window::ColumnWindow;

use tracing::debug;

use crate::api::types::{Row, Table};

/// The schedule table and everything the user can change about its display.
#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    /// The loaded table. Rows are kept in their current sorted order.
    table: Table,
    /// Sort column and direction.
    sort: SortState,
    /// Current column for narrow viewports.
    window: ColumnWindow,
    /// The live search term.
    search_term: String,
}

impl ScheduleState {
    /// Create a state holding an empty default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given table.
    pub fn with_table(table: Table) -> Self {
        let mut state = Self::new();
        state.set_table(table);
        state
    }

    /// Replace the table.
    ///
    /// Caption, header and rows are swapped in together. The sort indicator is
    /// cleared since the new rows arrive in server order; the search term is
    /// kept and the current column is re-clamped to the new header.
    pub fn set_table(&mut self, table: Table) {
        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "Replacing schedule table"
        );
        self.window.set_column_count(table.column_count());
        self.sort.clear();
        self.table = table;
    }

    /// Get the table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Get the caption.
    pub fn caption(&self) -> &str {
        &self.table.caption
    }

    /// Get the header.
    pub fn header(&self) -> &[String] {
        &self.table.header
    }

    /// Get all rows in their current order.
    pub fn rows(&self) -> &[Row] {
        &self.table.data
    }

    /// Get the sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Get the column window.
    pub fn window(&self) -> &ColumnWindow {
        &self.window
    }

    /// Sort by `column`, toggling direction if it is already the sorted one.
    ///
    /// Indices outside the header are ignored.
    pub fn activate_column(&mut self, column: usize) {
        if column >= self.table.column_count() {
            debug!(column, "Ignoring sort on out-of-range column");
            return;
        }

        self.sort.toggle(column);
        self.table.data = sort_rows(&self.table.data, column, self.sort.is_descending());
        debug!(
            column,
            descending = self.sort.is_descending(),
            "Sorted schedule rows"
        );
    }

    /// Show the next column on narrow viewports.
    pub fn next_column(&mut self) {
        self.window.next();
    }

    /// Show the previous column on narrow viewports.
    pub fn previous_column(&mut self) {
        self.window.previous();
    }

    /// Get the search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Append a character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    /// Remove the last character of the search term.
    pub fn pop_search_char(&mut self) -> Option<char> {
        self.search_term.pop()
    }

    /// Clear the search term.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Rows passing the current search term, in display order.
    ///
    /// Recomputed on every call.
    pub fn visible_rows(&self) -> Vec<&Row> {
        filter_rows(&self.table.data, &self.search_term)
    }

    /// Columns to display for the given viewport class.
    pub fn display_columns(&self, narrow: bool) -> Vec<usize> {
        if narrow {
            self.window.narrow_columns()
        } else {
            (0..self.table.column_count()).collect()
        }
    }
}
