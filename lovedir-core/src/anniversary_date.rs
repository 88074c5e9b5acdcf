//! Calendar dates that recur every year.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// A date whose month/day repeats every year.
///
/// The year is kept for display only; occurrences are computed from month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnniversaryDate {
    date: NaiveDate,
}

impl AnniversaryDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// Parse a date from user input.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339
    /// date-times (the date is taken in the offset the value carries). Anything else,
    /// including an empty string, is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date.into());
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
            return Some(date.into());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date().into());
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive().into());
        }

        None
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The occurrence of this month/day in `year`.
    ///
    /// February 29 falls on March 1 in years without one.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `today` until the next occurrence. Never negative.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let next = self.next_occurrence(today)?;
        Some((next - today).num_days().max(0))
    }
}

impl From<NaiveDate> for AnniversaryDate {
    fn from(date: NaiveDate) -> Self {
        AnniversaryDate { date }
    }
}

impl fmt::Display for AnniversaryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_accepted_formats() {
        let expected = AnniversaryDate::new(2023, 7, 8);
        assert_eq!(AnniversaryDate::parse("2023-07-08"), expected);
        assert_eq!(AnniversaryDate::parse("  2023-07-08 "), expected);
        assert_eq!(AnniversaryDate::parse("2023/07/08"), expected);
        assert_eq!(AnniversaryDate::parse("2023-07-08T21:30:00"), expected);
        assert_eq!(AnniversaryDate::parse("2023-07-08T21:30:00.250"), expected);
        assert_eq!(AnniversaryDate::parse("2023-07-08T21:30:00+08:00"), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(AnniversaryDate::parse(""), None);
        assert_eq!(AnniversaryDate::parse("   "), None);
        assert_eq!(AnniversaryDate::parse("not-a-date"), None);
        assert_eq!(AnniversaryDate::parse("2023-02-30"), None);
        assert_eq!(AnniversaryDate::parse("2023-13-01"), None);
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let date = AnniversaryDate::new(2023, 1, 24).unwrap();
        assert_eq!(date.next_occurrence(ymd(2025, 6, 1)), Some(ymd(2026, 1, 24)));
        assert_eq!(date.next_occurrence(ymd(2025, 1, 24)), Some(ymd(2025, 1, 24)));
        assert_eq!(date.next_occurrence(ymd(2025, 1, 1)), Some(ymd(2025, 1, 24)));
    }

    #[test]
    fn test_leap_day_falls_on_march_first() {
        let date = AnniversaryDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.occurrence_in(2025), Some(ymd(2025, 3, 1)));
        assert_eq!(date.occurrence_in(2028), Some(ymd(2028, 2, 29)));
        assert_eq!(date.days_until(ymd(2025, 2, 28)), Some(1));
        assert_eq!(date.days_until(ymd(2027, 3, 2)), Some(364));
    }

    #[test]
    fn test_display_is_iso() {
        let date = AnniversaryDate::new(2001, 3, 6).unwrap();
        assert_eq!(date.to_string(), "2001-03-06");
    }
}
