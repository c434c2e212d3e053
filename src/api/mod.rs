//! Schedule endpoint client and wire types.
//!
//! This module fetches the schedule table over HTTP and decodes it.

mod client;
pub mod error;
pub mod types;

pub use client::{ScheduleClient, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use types::{Cell, Row, Table};
