//! Range merge engine.
//!
//! Flattens date ranges into a sorted list of disjoint intervals. Touching
//! or overlapping intervals merge. Ids are reassigned by position: the i-th
//! merged interval takes the id of the i-th range of the first input, else
//! of the second, else a fresh one. Position does not follow an interval
//! through a merge, so an entry can change id when a merge reorders or
//! drops intervals.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::models::range::DateRange;

pub type Interval = (NaiveDateTime, NaiveDateTime);

/// Merge overlapping or touching intervals into a sorted, disjoint list.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals
        .iter()
        .map(|&(a, b)| if a <= b { (a, b) } else { (b, a) })
        .collect();
    sorted.sort_by_key(|&(start, _)| start);

    sorted.into_iter().fold(Vec::new(), |mut merged: Vec<Interval>, next| {
        match merged.last_mut() {
            Some(current) if next.0 <= current.1 => {
                current.1 = current.1.max(next.1);
            }
            _ => merged.push(next),
        }
        merged
    })
}

/// Merge `event2` into `event1`.
///
/// `None` returns `event1` unchanged; `Some(&[])` canonicalises `event1`.
pub fn merge_events(event1: &[DateRange], event2: Option<&[DateRange]>) -> Vec<DateRange> {
    let Some(event2) = event2 else {
        return event1.to_vec();
    };

    let values: Vec<Interval> = event1
        .iter()
        .chain(event2.iter())
        .map(|range| range.value)
        .collect();
    let merged = merge_intervals(&values);

    log::debug!(
        "Merged {} + {} ranges into {}",
        event1.len(),
        event2.len(),
        merged.len()
    );

    merged
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| {
            let id = event1
                .get(i)
                .or_else(|| event2.get(i))
                .map(|range| range.id)
                .unwrap_or_else(Uuid::new_v4);
            DateRange::new(id, start, end)
        })
        .collect()
}
