// Settings module
// Grid shape, row/column units, origin anchor and gesture timing

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::utils::date::start_of_week;

pub const MINS_IN_DAY: u32 = 24 * 60;

/// How a selected block of cells becomes date ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingPolicy {
    /// One range from the first cell to the last.
    Contiguous,
    /// One range per day column, same rows each day.
    #[default]
    Recurring,
    /// One range, clamped to the day it starts on.
    SingleDay,
}

/// Scheduler configuration, fixed for the lifetime of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub num_horizontal_cells: u32,
    pub num_vertical_cells: u32,
    pub minutes_per_row: u32,
    pub days_per_column: u32,
    /// First displayed day; the current week's Monday when unset.
    pub origin_date: Option<NaiveDate>,
    pub touch_hold_ms: u64,
    pub policy: MappingPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_horizontal_cells: 7,
            num_vertical_cells: MINS_IN_DAY / 15,
            minutes_per_row: 15,
            days_per_column: 1,
            origin_date: None,
            touch_hold_ms: 300,
            policy: MappingPolicy::Recurring,
        }
    }
}

impl SchedulerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.num_horizontal_cells == 0 || self.num_vertical_cells == 0 {
            return Err(SchedulerError::InvalidConfig(
                "cell counts must be greater than zero".to_string(),
            ));
        }

        if self.minutes_per_row == 0 || self.days_per_column == 0 {
            return Err(SchedulerError::InvalidConfig(
                "row and column units must be greater than zero".to_string(),
            ));
        }

        if self.minutes_per_row > MINS_IN_DAY {
            return Err(SchedulerError::InvalidConfig(format!(
                "a row cannot cover more than a day ({} minutes)",
                self.minutes_per_row
            )));
        }

        Ok(())
    }

    /// Anchor instant of column 0 / row 0.
    pub fn origin(&self, today: NaiveDate) -> NaiveDateTime {
        let date = self.origin_date.unwrap_or(today);
        start_of_week(date, Weekday::Mon)
    }
}
