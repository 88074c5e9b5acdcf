//! Countdowns to yearly-recurring dates.
//!
//! Every function here takes "today" as a `NaiveDate`, so the arithmetic runs on
//! whole calendar days and never on timestamps.

use chrono::{Local, NaiveDate};

use crate::anniversary_date::AnniversaryDate;

/// Days until the next yearly occurrence of `date`'s month/day, counting from `today`.
///
/// Returns `Some(0)` when the month/day is today, and `None` when `date` can't be parsed.
pub fn days_until_next_occurrence(date: &str, today: NaiveDate) -> Option<i64> {
    AnniversaryDate::parse(date)?.days_until(today)
}

/// Same as [`days_until_next_occurrence`], relative to the local clock's date.
pub fn days_until_from_now(date: &str) -> Option<i64> {
    days_until_next_occurrence(date, Local::now().date_naive())
}

/// Whole days elapsed since `start`.
///
/// `None` when `start` can't be parsed or lies after `today`.
pub fn days_since(start: &str, today: NaiveDate) -> Option<i64> {
    let start = AnniversaryDate::parse(start)?.date();
    let days = (today - start).num_days();
    (days >= 0).then_some(days)
}

/// The item whose date comes around soonest, with its countdown.
///
/// Items with an unparseable date are left out. On a tie the earlier item wins.
pub fn nearest<'a, T, F>(items: &'a [T], today: NaiveDate, date_of: F) -> Option<(&'a T, i64)>
where
    F: Fn(&T) -> &str,
{
    let mut best: Option<(&'a T, i64)> = None;

    for item in items {
        let Some(days) = days_until_next_occurrence(date_of(item), today) else {
            continue;
        };
        match best {
            Some((_, best_days)) if best_days <= days => {}
            _ => best = Some((item, days)),
        }
    }

    best
}

/// Sort items by days until their next occurrence, soonest first.
///
/// The sort is stable. Items with an unparseable date go last.
pub fn sort_by_next_occurrence<T, F>(items: &mut [T], today: NaiveDate, date_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| match days_until_next_occurrence(date_of(item), today) {
        Some(days) => (0, days),
        None => (1, 0),
    });
}
