// Unit tests for cell → date mapping with injected unit conversions
// Mocked conversions confirm every policy goes through the injected units

use chrono::{NaiveDate, NaiveDateTime};
use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use test_case::test_case;
use uuid::Uuid;
use weekly_scheduler::models::geometry::CellInfo;
use weekly_scheduler::services::mapping::{
    CellMapping, ContiguousMapping, GridPrecision, MappingOptions, RangeToCells, RecurringMapping,
    SingleDayMapping, UnitConversion,
};

mock! {
    Units {}

    impl UnitConversion for Units {
        fn to_day(&self, x: u32) -> i64;
        fn to_min(&self, y: u32) -> i64;
        fn to_x(&self, days: f64) -> f64;
        fn to_y(&self, minutes: f64) -> f64;
    }
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn monday() -> NaiveDateTime {
    at(4, 0, 0)
}

fn options(minutes_per_row: u32) -> MappingOptions {
    MappingOptions::new(monday(), GridPrecision::new(minutes_per_row, 1))
}

// ============================================================================
// Injected conversions
// ============================================================================

#[test]
fn test_contiguous_uses_injected_units() {
    let mut units = MockUnits::new();
    units.expect_to_day().times(2).returning(|x| x as i64);
    units
        .expect_to_min()
        .times(2)
        .returning(|y| y as i64 * 60);

    let mapping = ContiguousMapping::new(MappingOptions::new(monday(), units));
    let ranges = mapping.map_cell(&CellInfo::new(Uuid::new_v4(), 1, 9, 1, 11));

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].value, (at(5, 9, 0), at(5, 11, 0)));
}

#[test]
fn test_recurring_uses_injected_row_length() {
    let mut units = MockUnits::new();
    units.expect_to_day().returning(|x| x as i64 * 2);
    // One call for the span length, one per column for the start row
    units.expect_to_min().with(eq(2)).times(1).returning(|_| 120);
    units.expect_to_min().with(eq(8)).times(2).returning(|_| 480);

    let mapping = RecurringMapping::new(MappingOptions::new(monday(), units));
    let ranges = mapping.map_cell(&CellInfo::new(Uuid::new_v4(), 0, 8, 1, 9));
    let values: Vec<_> = ranges.iter().map(|r| r.value).collect();

    assert_eq!(
        values,
        vec![(at(4, 8, 0), at(4, 10, 0)), (at(6, 8, 0), at(6, 10, 0))]
    );
}

#[test]
fn test_range_to_cells_uses_inverse_units() {
    let mut units = MockUnits::new();
    units.expect_to_day().returning(|x| x as i64);
    units.expect_to_x().returning(|days| days);
    units.expect_to_y().returning(|minutes| minutes / 60.0);

    let to_cells = RangeToCells::new(MappingOptions::new(monday(), units), 7, 24);
    let range = weekly_scheduler::models::range::DateRange::new(
        Uuid::new_v4(),
        at(6, 9, 0),
        at(6, 11, 0),
    );

    let cells = to_cells.cells_for_range(&range);
    assert_eq!(cells.len(), 1);
    assert_eq!((cells[0].start_x, cells[0].start_y, cells[0].end_y), (2, 9, 10));
}

// ============================================================================
// Row precision
// ============================================================================

#[test_case(15, 36, 40 ; "quarter hour rows")]
#[test_case(30, 18, 20 ; "half hour rows")]
#[test_case(60, 9, 10 ; "hour rows")]
fn test_contiguous_nine_to_ten(minutes_per_row: u32, start_y: u32, end_y: u32) {
    let cell = CellInfo::new(Uuid::new_v4(), 0, start_y, 0, end_y);
    let ranges = ContiguousMapping::new(options(minutes_per_row)).map_cell(&cell);
    assert_eq!(ranges[0].value, (at(4, 9, 0), at(4, 10, 0)));
}

#[test_case(15, 36, 39 ; "quarter hour rows")]
#[test_case(30, 18, 19 ; "half hour rows")]
#[test_case(60, 9, 9 ; "hour rows")]
fn test_recurring_nine_to_ten(minutes_per_row: u32, start_y: u32, end_y: u32) {
    let cell = CellInfo::new(Uuid::new_v4(), 0, start_y, 2, end_y);
    let ranges = RecurringMapping::new(options(minutes_per_row)).map_cell(&cell);
    let values: Vec<_> = ranges.iter().map(|r| r.value).collect();

    assert_eq!(
        values,
        vec![
            (at(4, 9, 0), at(4, 10, 0)),
            (at(5, 9, 0), at(5, 10, 0)),
            (at(6, 9, 0), at(6, 10, 0)),
        ]
    );
}

#[test_case(30, 47 ; "half hour rows")]
#[test_case(60, 23 ; "hour rows")]
fn test_recurring_last_row_stays_in_day(minutes_per_row: u32, last_row: u32) {
    let cell = CellInfo::new(Uuid::new_v4(), 3, last_row, 3, last_row);
    let ranges = RecurringMapping::new(options(minutes_per_row)).map_cell(&cell);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].end(), at(7, 23, 59) + chrono::Duration::seconds(59));
}

#[test_case(30 ; "half hour rows")]
#[test_case(60 ; "hour rows")]
fn test_single_day_single_cell_gets_one_row(minutes_per_row: u32) {
    let cell = CellInfo::new(Uuid::new_v4(), 4, 10, 4, 10);
    let mapping = SingleDayMapping::new(options(minutes_per_row));
    let ranges = mapping.map_cell(&cell);

    let start = at(8, 0, 0) + chrono::Duration::minutes(10 * minutes_per_row as i64);
    assert_eq!(
        ranges[0].value,
        (start, start + chrono::Duration::minutes(minutes_per_row as i64))
    );
}
