// Test fixtures - reusable test data
// Provides a consistent week, grid and mapping setup across test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use weekly_scheduler::models::geometry::ContainerSize;
use weekly_scheduler::services::grid::Grid;
use weekly_scheduler::services::mapping::{GridPrecision, MappingOptions};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday Mar 4, 2019 at midnight (start of the displayed week)
    pub fn origin_monday() -> NaiveDateTime {
        at(4, 0, 0)
    }

    /// A time in the week of Mar 4, 2019 (day 4 is Monday, day 10 Sunday)
    pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// 7 day columns × 96 fifteen-minute rows from the origin Monday
pub fn week_options() -> MappingOptions {
    MappingOptions::new(dates::origin_monday(), GridPrecision::new(15, 1))
}

/// 700×960 container: cells are 100px wide and 10px tall
pub fn week_container() -> ContainerSize {
    ContainerSize::new(700.0, 960.0)
}

pub fn week_grid() -> Grid {
    Grid::for_container(week_container(), 7, 96).unwrap()
}
