//! Core library for lovedir.
//!
//! - `recurrence` computes countdowns to yearly-recurring dates
//! - `ics` exports anniversaries as an iCalendar document (and reads one back)
//! - `journal` persists anniversaries, milestones, diary entries and wishes as JSON

pub mod anniversary_date;
pub mod config;
pub mod constants;
pub mod error;
pub mod ics;
pub mod journal;
pub mod recurrence;

pub use anniversary_date::AnniversaryDate;
pub use config::LoveDirConfig;
pub use error::{LoveDirError, LoveDirResult};
pub use ics::{CalendarEvent, build_calendar_document};
pub use journal::{
    Anniversary, Entry, EntryEdit, EntryFilter, EntryTag, ImportReport, Journal, Milestone, Wish,
};
pub use recurrence::days_until_next_occurrence;
