//! Human-readable labels for date ranges shown on the grid.

use chrono::{NaiveDateTime, Timelike};

use super::is_same_day;
use crate::models::range::DateRange;

const DEFAULT_TEMPLATE: &str = "%a %-I:%M%P";
const TIME_TEMPLATE: &str = "%-I:%M%P";

/// Label a range, e.g. `Mon 9:00am - 10:00am`.
///
/// Explicit chrono templates replace the default `Mon 9:00am` form and
/// always produce the two-sided `start-end` layout.
pub fn text_for_range(
    range: &DateRange,
    template: Option<&str>,
    template2: Option<&str>,
) -> String {
    let (start, end) = (range.start(), range.end());

    if is_same_day(start, end) && template.is_none() {
        return format!(
            "{} - {}",
            start.format(DEFAULT_TEMPLATE),
            end.format(TIME_TEMPLATE)
        );
    }

    let start_str = start.format(template.unwrap_or(DEFAULT_TEMPLATE));
    let end_str = end.format(template2.unwrap_or(DEFAULT_TEMPLATE));
    format!("{}-{}", start_str, end_str)
}

/// Compact label, e.g. `Mon 9 – 10:30am`; the meridiem is printed once when
/// both ends share it.
pub fn text_for_span(
    span: (NaiveDateTime, NaiveDateTime),
    template: Option<&str>,
    template2: Option<&str>,
) -> String {
    let (start, end) = span;

    if is_same_day(start, end) && template.is_none() {
        let (first_m, second_m) = drop_same(start, end, "%P");
        return format!(
            "{} {}{} – {}{}",
            start.format("%a"),
            format_hour(start),
            first_m,
            format_hour(end),
            second_m
        );
    }

    let start_str = start.format(template.unwrap_or(DEFAULT_TEMPLATE));
    let end_str = end.format(template2.unwrap_or(DEFAULT_TEMPLATE));
    format!("{} – {}", start_str, end_str)
}

fn drop_same(first: NaiveDateTime, second: NaiveDateTime, template: &str) -> (String, String) {
    let first = first.format(template).to_string();
    let second = second.format(template).to_string();
    if first != second {
        (first, second)
    } else {
        (String::new(), second)
    }
}

fn format_hour(date: NaiveDateTime) -> String {
    if date.minute() == 0 {
        date.format("%-I").to_string()
    } else {
        date.format("%-I:%M").to_string()
    }
}
