//! iCalendar export and import.
//!
//! Anniversaries are written as all-day events repeating yearly on the same date.

mod generate;
mod parse;

use serde::{Deserialize, Serialize};

pub use generate::{build_calendar_document, escape_text};
pub use parse::parse_calendar_document;

/// A titled date to export as a yearly event.
///
/// The date stays text (`YYYY-MM-DD`) so malformed input passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: String,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        CalendarEvent {
            title: title.into(),
            date: date.into(),
        }
    }
}
