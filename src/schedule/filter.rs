//! Case-insensitive text filter over table rows.

use crate::api::types::Row;

/// Check whether any text cell of `row` contains `term_lower`.
///
/// `term_lower` must already be lower-cased. Non-text cells never match.
pub fn row_matches(row: &Row, term_lower: &str) -> bool {
    row.iter()
        .filter_map(|cell| cell.as_text())
        .any(|text| text.to_lowercase().contains(term_lower))
}

/// Return the rows that pass the search term, in their stored order.
///
/// An empty term passes every row.
pub fn filter_rows<'a>(rows: &'a [Row], term: &str) -> Vec<&'a Row> {
    if term.is_empty() {
        return rows.iter().collect();
    }

    let term_lower = term.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &term_lower))
        .collect()
}
