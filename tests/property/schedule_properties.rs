// Property-based tests for grid geometry, cell mapping and range merging
// Checks the conversion and merge guarantees against random inputs

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use uuid::Uuid;
use weekly_scheduler::models::geometry::CellInfo;
use weekly_scheduler::models::range::DateRange;
use weekly_scheduler::services::grid::Grid;
use weekly_scheduler::services::mapping::{
    CellMapping, ContiguousMapping, GridPrecision, MappingOptions, RecurringMapping,
    SingleDayMapping,
};
use weekly_scheduler::services::merge::{merge_events, merge_intervals, Interval};
use weekly_scheduler::utils::date::start_of_day;

const MINS_IN_WEEK: i64 = 7 * 24 * 60;

fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 3, 4)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn options() -> MappingOptions {
    MappingOptions::new(origin(), GridPrecision::new(15, 1))
}

/// A cell block with its corners in drag order (not normalized).
fn corner_cell(start: (u32, u32), end: (u32, u32)) -> CellInfo {
    CellInfo {
        id: Uuid::new_v4(),
        start_x: start.0,
        start_y: start.1,
        end_x: end.0,
        end_y: end.1,
        span_x: start.0.abs_diff(end.0) + 1,
        span_y: start.1.abs_diff(end.1) + 1,
    }
}

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0..MINS_IN_WEEK, 1..600i64).prop_map(|(offset, length)| {
        let start = origin() + Duration::minutes(offset);
        (start, start + Duration::minutes(length))
    })
}

fn ranges(intervals: &[Interval]) -> Vec<DateRange> {
    intervals
        .iter()
        .map(|&(start, end)| DateRange::new(Uuid::new_v4(), start, end))
        .collect()
}

fn values(ranges: &[DateRange]) -> Vec<Interval> {
    ranges.iter().map(|range| range.value).collect()
}

proptest! {
    /// Property: a cell block survives cell → rect → cell unchanged
    #[test]
    fn prop_grid_round_trip(
        width in 50.0..4000.0f64,
        height in 50.0..4000.0f64,
        columns in 1..15u32,
        rows in 1..200u32,
        a in (0..1000u32, 0..1000u32),
        b in (0..1000u32, 0..1000u32),
    ) {
        let grid = Grid::new(width, height, columns, rows).unwrap();
        let cell = CellInfo::new(
            Uuid::new_v4(),
            a.0 % columns,
            a.1 % rows,
            b.0 % columns,
            b.1 % rows,
        );

        prop_assert_eq!(grid.cell_from_rect(&grid.rect_from_cell(&cell)), cell);
    }

    /// Property: contiguous ranges always run forwards, whichever corner is earlier
    #[test]
    fn prop_contiguous_start_before_end(
        start in (0..7u32, 0..96u32),
        end in (0..7u32, 0..96u32),
    ) {
        let range = ContiguousMapping::new(options()).map_one(&corner_cell(start, end));
        prop_assert!(range.value.0 < range.value.1);
    }

    /// Property: N day columns yield N ranges in ascending start order
    #[test]
    fn prop_recurring_one_range_per_column(
        start_x in 0..7u32,
        width in 0..7u32,
        start_y in 0..96u32,
        span in 1..96u32,
    ) {
        let end_x = (start_x + width).min(6);
        let end_y = (start_y + span - 1).min(95);
        let cell = CellInfo::new(Uuid::new_v4(), start_x, start_y, end_x, end_y);

        let ranges = RecurringMapping::new(options()).map_cell(&cell);

        prop_assert_eq!(ranges.len() as u32, end_x - start_x + 1);
        prop_assert!(ranges.windows(2).all(|w| w[0].start() < w[1].start()));
        prop_assert!(ranges.iter().all(|r| r.start() < r.end()));
    }

    /// Property: single-day ranges end on their start day (midnight closes the day)
    #[test]
    fn prop_single_day_never_crosses_days(
        start in (0..7u32, 0..96u32),
        end in (0..7u32, 0..96u32),
    ) {
        let ranges = SingleDayMapping::new(options()).map_cell(&corner_cell(start, end));
        prop_assert_eq!(ranges.len(), 1);

        let (first, last) = ranges[0].value;
        let day_end = start_of_day(first) + Duration::days(1);
        prop_assert!(first < last);
        prop_assert!(last.date() == first.date() || last == day_end);
    }

    /// Property: merging is idempotent on the interval set
    #[test]
    fn prop_merge_idempotent(intervals in prop::collection::vec(interval_strategy(), 0..40)) {
        let once = merge_intervals(&intervals);
        prop_assert_eq!(merge_intervals(&once), once.clone());

        let canonical = merge_events(&ranges(&intervals), Some(&[]));
        prop_assert_eq!(values(&merge_events(&canonical, Some(&[]))), once);
    }

    /// Property: merged intervals are sorted, disjoint and non-touching
    #[test]
    fn prop_merge_disjoint(intervals in prop::collection::vec(interval_strategy(), 0..40)) {
        let merged = merge_intervals(&intervals);
        prop_assert!(merged.windows(2).all(|w| w[0].1 < w[1].0));
        prop_assert!(merged.iter().all(|(start, end)| start <= end));
    }

    /// Property: the merged interval set ignores input order and grouping
    #[test]
    fn prop_merge_commutative_and_associative(
        a in prop::collection::vec(interval_strategy(), 0..15),
        b in prop::collection::vec(interval_strategy(), 0..15),
        c in prop::collection::vec(interval_strategy(), 0..15),
    ) {
        let (a, b, c) = (ranges(&a), ranges(&b), ranges(&c));

        prop_assert_eq!(
            values(&merge_events(&a, Some(&b))),
            values(&merge_events(&b, Some(&a)))
        );

        let left = merge_events(&merge_events(&a, Some(&b)), Some(&c));
        let right = merge_events(&a, Some(&merge_events(&b, Some(&c))));
        prop_assert_eq!(values(&left), values(&right));
    }
}
