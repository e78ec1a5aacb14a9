// Date utility functions
// Day-boundary helpers over naive (timezone-free) instants

pub mod format;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(last_second())
}

/// True when `date` sits exactly on midnight.
pub fn is_midnight(date: NaiveDateTime) -> bool {
    date == start_of_day(date)
}

/// Monday (or `week_start`) of the week containing `date`, at midnight.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDateTime {
    let offset = (7 + date.weekday().num_days_from_monday() as i64
        - week_start.num_days_from_monday() as i64)
        % 7;
    (date - Duration::days(offset)).and_time(NaiveTime::MIN)
}

/// Keep the time of day of `time_of` but move it onto the calendar day of `day_of`.
pub fn with_day_of(time_of: NaiveDateTime, day_of: NaiveDateTime) -> NaiveDateTime {
    day_of.date().and_time(time_of.time())
}

fn last_second() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}
