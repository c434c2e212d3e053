//! schedview - a terminal viewer for class schedule tables.
//!
//! The schedule is fetched once from an HTTP endpoint and shown as a
//! sortable, searchable table that adapts to narrow terminals.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod schedule;
pub mod tasks;
pub mod ui;
