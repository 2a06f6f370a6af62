// Date utility functions
// Day and week arithmetic on wall-clock times used by the layout pass

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Get the first day of the week containing `date`.
///
/// `first_day_of_week` counts from Sunday (0 = Sunday, 1 = Monday, ...).
/// Dates in the first partial week of chrono's range have no earlier week
/// start and are returned unchanged.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let offset = days_into_week(date, first_day_of_week);
    date.checked_sub_signed(Duration::days(offset)).unwrap_or(date)
}

/// Days from the start of the week to `date` (0..7).
pub fn days_into_week(date: NaiveDate, first_day_of_week: u8) -> i64 {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    (weekday - first_day_of_week as i64 + 7) % 7
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_since_midnight(time: NaiveDateTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

/// The calendar day an interval ending at `end` last touches.
///
/// An end exactly at midnight closes the previous day, so a 10:00 to
/// 00:00 interval stays on one day. Zero-length intervals keep their day.
pub fn last_day_of_interval(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDate {
    if end > start && end.time() == NaiveTime::MIN {
        end.date() - Duration::days(1)
    } else {
        end.date()
    }
}

/// Whole minutes between `start` and `end`, rounded to the nearest minute.
/// Inverted intervals count as zero.
pub fn rounded_minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if end <= start {
        return 0;
    }
    let seconds = (end - start).num_seconds();
    (seconds + 30) / 60
}
