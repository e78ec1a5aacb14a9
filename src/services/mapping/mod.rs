//! Cell–date mapping.
//!
//! Every policy is built on one primitive: a grid coordinate `(x, y)` is the
//! instant `origin + to_day(x) days + to_min(y) minutes`. The unit
//! conversions are injected so the same mapping works for 15, 30 or 60 minute
//! rows.

mod cells;
mod contiguous;
mod recurring;
mod single_day;

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::geometry::CellInfo;
use crate::models::range::DateRange;
use crate::models::settings::{MappingPolicy, SchedulerConfig, MINS_IN_DAY};

pub use cells::RangeToCells;
pub use contiguous::ContiguousMapping;
pub use recurring::RecurringMapping;
pub use single_day::SingleDayMapping;

/// Furthest a cell corner may sit from the origin, in days. Indices past it
/// are clamped so every policy stays total.
const MAX_DAY_OFFSET: i64 = 1_000_000;

/// Conversions between grid indices and calendar units.
pub trait UnitConversion {
    /// Days from the origin to column `x`.
    fn to_day(&self, x: u32) -> i64;
    /// Minutes from the start of a day to row `y`.
    fn to_min(&self, y: u32) -> i64;
    /// Fractional column for a day offset.
    fn to_x(&self, days: f64) -> f64;
    /// Fractional row for a minute-of-day offset.
    fn to_y(&self, minutes: f64) -> f64;
}

/// Fixed-size rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPrecision {
    pub minutes_per_row: u32,
    pub days_per_column: u32,
}

impl GridPrecision {
    pub fn new(minutes_per_row: u32, days_per_column: u32) -> Self {
        Self {
            minutes_per_row,
            days_per_column,
        }
    }
}

impl Default for GridPrecision {
    fn default() -> Self {
        Self::new(15, 1)
    }
}

impl UnitConversion for GridPrecision {
    fn to_day(&self, x: u32) -> i64 {
        (x as i64).saturating_mul(self.days_per_column as i64)
    }

    fn to_min(&self, y: u32) -> i64 {
        (y as i64).saturating_mul(self.minutes_per_row as i64)
    }

    fn to_x(&self, days: f64) -> f64 {
        days / self.days_per_column as f64
    }

    fn to_y(&self, minutes: f64) -> f64 {
        minutes / self.minutes_per_row as f64
    }
}

/// Origin anchor plus unit conversions; immutable once built.
#[derive(Clone)]
pub struct MappingOptions {
    pub origin: NaiveDateTime,
    pub units: Arc<dyn UnitConversion + Send + Sync>,
}

impl fmt::Debug for MappingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingOptions")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl MappingOptions {
    pub fn new(origin: NaiveDateTime, units: impl UnitConversion + Send + Sync + 'static) -> Self {
        Self {
            origin,
            units: Arc::new(units),
        }
    }

    pub fn from_config(config: &SchedulerConfig, today: NaiveDate) -> Self {
        Self::new(
            config.origin(today),
            GridPrecision::new(config.minutes_per_row, config.days_per_column),
        )
    }

    /// The instant at the top-left corner of cell `(x, y)`.
    ///
    /// Offsets beyond `MAX_DAY_OFFSET` days are clamped rather than
    /// overflowing the calendar.
    pub fn cell_to_date(&self, x: u32, y: u32) -> NaiveDateTime {
        let max_minutes = MAX_DAY_OFFSET * MINS_IN_DAY as i64;
        let days = self.units.to_day(x).clamp(-MAX_DAY_OFFSET, MAX_DAY_OFFSET);
        let minutes = self.units.to_min(y).clamp(-max_minutes, max_minutes);

        self.origin + Duration::days(days) + Duration::minutes(minutes)
    }

    /// Length of a single row.
    pub fn row_duration(&self) -> Duration {
        Duration::minutes(self.units.to_min(1) - self.units.to_min(0))
    }
}

/// Turns a selected cell block into date ranges.
pub trait CellMapping {
    fn map_cell(&self, cell: &CellInfo) -> Vec<DateRange>;
}

/// Mapper for the configured policy.
pub fn mapper_for(
    policy: MappingPolicy,
    options: MappingOptions,
) -> Box<dyn CellMapping + Send + Sync> {
    match policy {
        MappingPolicy::Contiguous => Box::new(ContiguousMapping::new(options)),
        MappingPolicy::Recurring => Box::new(RecurringMapping::new(options)),
        MappingPolicy::SingleDay => Box::new(SingleDayMapping::new(options)),
    }
}
