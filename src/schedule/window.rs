//! Column windowing for narrow viewports.
//!
//! On a narrow viewport only column 0 and one "current" column are shown.
//! The current column is moved with previous/next and never wraps around.

/// The column window.
///
/// `current` stays within `[1, column_count - 1]` whenever there are at
/// least two columns, and is 1 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWindow {
    /// The non-key column shown next to column 0.
    current: usize,
    /// Number of header columns.
    column_count: usize,
}

impl Default for ColumnWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ColumnWindow {
    /// Create a window over `column_count` columns, starting at column 1.
    pub fn new(column_count: usize) -> Self {
        Self {
            current: 1,
            column_count,
        }
    }

    /// Get the current column.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Highest index the current column may take.
    fn last(&self) -> usize {
        self.column_count.saturating_sub(1).max(1)
    }

    /// Move to the next column, stopping at the last one.
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.last());
    }

    /// Move to the previous column, stopping at column 1.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Update the number of columns, keeping the current column in range.
    pub fn set_column_count(&mut self, column_count: usize) {
        self.column_count = column_count;
        self.current = self.current.clamp(1, self.last());
    }

    /// Whether `column` is hidden on a narrow viewport.
    pub fn is_hidden_when_narrow(&self, column: usize) -> bool {
        column != 0 && column != self.current
    }

    /// Columns shown on a narrow viewport, in display order.
    pub fn narrow_columns(&self) -> Vec<usize> {
        (0..self.column_count)
            .filter(|&c| !self.is_hidden_when_narrow(c))
            .collect()
    }

    /// Whether moving back is possible.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether moving forward is possible.
    pub fn has_next(&self) -> bool {
        self.current < self.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_column_one() {
        let window = ColumnWindow::new(4);
        assert_eq!(window.current(), 1);
        assert_eq!(window.column_count(), 4);
    }

    #[test]
    fn test_next_clamps_at_last_column() {
        let mut window = ColumnWindow::new(3);
        window.next();
        assert_eq!(window.current(), 2);
        window.next();
        assert_eq!(window.current(), 2);
    }

    #[test]
    fn test_previous_clamps_at_column_one() {
        let mut window = ColumnWindow::new(3);
        window.next();
        window.previous();
        window.previous();
        assert_eq!(window.current(), 1);
    }

    #[test]
    fn test_stays_in_range_for_any_sequence() {
        for count in 2..7 {
            let mut window = ColumnWindow::new(count);
            for step in 0..40usize {
                if (step * 7 + count) % 3 == 0 {
                    window.previous();
                } else {
                    window.next();
                }
                assert!(window.current() >= 1);
                assert!(window.current() <= count - 1);
            }
        }
    }

    #[test]
    fn test_fewer_than_two_columns_is_noop() {
        for count in 0..2 {
            let mut window = ColumnWindow::new(count);
            window.next();
            assert_eq!(window.current(), 1);
            window.previous();
            assert_eq!(window.current(), 1);
        }
    }

    #[test]
    fn test_set_column_count_reclamps() {
        let mut window = ColumnWindow::new(5);
        window.next();
        window.next();
        window.next();
        assert_eq!(window.current(), 4);

        window.set_column_count(3);
        assert_eq!(window.current(), 2);
    }

    #[test]
    fn test_hidden_when_narrow() {
        let mut window = ColumnWindow::new(4);
        window.next();
        assert!(!window.is_hidden_when_narrow(0));
        assert!(window.is_hidden_when_narrow(1));
        assert!(!window.is_hidden_when_narrow(2));
        assert!(window.is_hidden_when_narrow(3));
        assert_eq!(window.narrow_columns(), vec![0, 2]);
    }

    #[test]
    fn test_narrow_columns_single_column() {
        let window = ColumnWindow::new(1);
        assert_eq!(window.narrow_columns(), vec![0]);
    }

    #[test]
    fn test_has_previous_and_next() {
        let mut window = ColumnWindow::new(3);
        assert!(!window.has_previous());
        assert!(window.has_next());
        window.next();
        assert!(window.has_previous());
        assert!(!window.has_next());
    }
}
