//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the schedule view and the
//! small components it is built from.

mod components;
pub mod theme;
mod views;

pub use components::{
    highlight_text, render_context_help, render_help_line, LoadingIndicator, SearchBar,
};
pub use theme::Theme;
pub use views::{ScheduleAction, ScheduleView};
