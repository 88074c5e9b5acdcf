//! ICS parsing using the icalendar crate's parser.

use chrono::NaiveDate;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use super::CalendarEvent;

/// Read every VEVENT of an ICS document as a `CalendarEvent`.
///
/// Events without a SUMMARY get "(No title)". Events whose DTSTART can't be read
/// are skipped, as is a document that fails to parse.
pub fn parse_calendar_document(content: &str) -> Vec<CalendarEvent> {
    let unfolded = unfold(content);
    let Ok(calendar) = read_calendar(&unfolded) else {
        return Vec::new();
    };

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| {
            let start = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;
            let title = vevent
                .find_prop("SUMMARY")
                .map(|p| p.val.to_string())
                .unwrap_or_else(|| "(No title)".to_string());

            Some(CalendarEvent {
                title,
                date: start_date(start).format("%Y-%m-%d").to_string(),
            })
        })
        .collect()
}

fn start_date(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.date_naive(),
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}
