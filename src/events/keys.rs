//! Key hint definitions for the footer help bar.

/// Which part of the UI currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Waiting for the table to load.
    Loading,
    /// Browsing the table on a wide viewport.
    Table,
    /// Browsing the table on a narrow viewport (column paging available).
    TableNarrow,
    /// Typing into the search bar.
    Search,
}

/// Get the footer hints for a context.
///
/// Keys are wrapped in brackets so the help bar can style them.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Loading => "[q] quit",
        KeyContext::Table => "[/] search  [1-9] sort  [j/k] rows  [r] reload  [q] quit",
        KeyContext::TableNarrow => {
            "[h] previous  [l] next  [/] search  [1-9] sort  [r] reload  [q] quit"
        }
        KeyContext::Search => "[Enter] keep  [Esc] clear  [Backspace] delete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_hints_mention_paging() {
        let hints = get_context_hints(KeyContext::TableNarrow);
        assert!(hints.contains("previous"));
        assert!(hints.contains("next"));
    }

    #[test]
    fn test_wide_hints_hide_paging() {
        let hints = get_context_hints(KeyContext::Table);
        assert!(!hints.contains("previous"));
        assert!(!hints.contains("next"));
    }

    #[test]
    fn test_search_hints_explain_enter_and_escape() {
        let hints = get_context_hints(KeyContext::Search);
        assert!(hints.contains("[Enter] keep"));
        assert!(hints.contains("[Esc] clear"));
    }
}
