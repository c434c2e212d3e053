//! Application views (screens).

mod schedule;

pub use schedule::{ScheduleAction, ScheduleView};
