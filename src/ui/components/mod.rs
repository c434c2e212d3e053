//! Reusable UI components.

mod help_bar;
mod loading;
mod search_bar;

pub use help_bar::{render_context_help, render_help_line};
pub use loading::LoadingIndicator;
pub use search_bar::{highlight_text, SearchBar};
