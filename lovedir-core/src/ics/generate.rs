//! ICS document generation.

use uuid::Uuid;

use super::CalendarEvent;
use crate::constants::{ICS_PRODID, ICS_UID_DOMAIN};

/// Build a VCALENDAR with one yearly all-day VEVENT per input event.
///
/// Every line is CRLF-terminated, including the closing `END:VCALENDAR`, so the
/// document always ends in `\r\n` rather than being a separator-joined list of
/// lines. Dates are not validated: separators are stripped and whatever remains
/// goes into the output.
pub fn build_calendar_document(events: &[CalendarEvent]) -> String {
    build_with_uid_suffix(events, random_uid_suffix)
}

/// Escape TEXT values per RFC 5545: backslash, comma and semicolon.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            _ => out.push(c),
        }
    }
    out
}

fn build_with_uid_suffix<F>(events: &[CalendarEvent], mut uid_suffix: F) -> String
where
    F: FnMut() -> String,
{
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{ICS_PRODID}"),
    ];

    for event in events {
        let dt = compact_date(&event.date);
        lines.push("BEGIN:VEVENT".into());
        lines.push(format!("UID:{dt}-{}@{ICS_UID_DOMAIN}", uid_suffix()));
        lines.push(format!("DTSTAMP:{dt}T000000Z"));
        lines.push(format!("DTSTART;VALUE=DATE:{dt}"));
        lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
        lines.push("RRULE:FREQ=YEARLY".into());
        lines.push("END:VEVENT".into());
    }

    lines.push("END:VCALENDAR".into());

    let mut result = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        result.push_str(line);
        result.push_str("\r\n");
    }
    result
}

/// `2024-07-08` -> `20240708`
fn compact_date(date: &str) -> String {
    date.replace('-', "")
}

fn random_uid_suffix() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..12].to_string()
}
