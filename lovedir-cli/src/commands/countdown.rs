use anyhow::Result;
use chrono::NaiveDate;
use lovedir_core::recurrence::{days_until_from_now, days_until_next_occurrence};

use crate::render::format_countdown;

/// Print the countdown to `date`, counting from `today` or else the local date.
pub fn run(date: &str, today: Option<NaiveDate>) -> Result<()> {
    let days = match today {
        Some(today) => days_until_next_occurrence(date, today),
        None => days_until_from_now(date),
    };
    let Some(days) = days else {
        anyhow::bail!("Invalid date '{}'. Expected YYYY-MM-DD", date);
    };

    println!("{} ({})", days, format_countdown(Some(days)));
    Ok(())
}
