use chrono::Duration;

use crate::models::geometry::CellInfo;
use crate::models::range::DateRange;
use crate::utils::date::{is_midnight, is_same_day, start_of_day, with_day_of};

use super::{CellMapping, ContiguousMapping, MappingOptions};

/// Contiguous mapping clamped to the day the range starts on.
///
/// An end on another day is moved onto the start's day at the same time of
/// day; an end exactly on midnight becomes the start of the following day.
#[derive(Debug, Clone)]
pub struct SingleDayMapping {
    contiguous: ContiguousMapping,
}

impl SingleDayMapping {
    pub fn new(options: MappingOptions) -> Self {
        Self {
            contiguous: ContiguousMapping::new(options),
        }
    }

    fn constrain_to_one_day(&self, range: DateRange) -> DateRange {
        let (start, end) = range.value;
        if is_same_day(start, end) {
            return range;
        }

        if is_midnight(end) {
            return DateRange::new(range.id, start, start_of_day(start + Duration::days(1)));
        }

        let mut end = with_day_of(end, start);
        if end == start {
            end = start + self.contiguous.options().row_duration();
        }
        DateRange::new(range.id, start, end)
    }
}

impl CellMapping for SingleDayMapping {
    fn map_cell(&self, cell: &CellInfo) -> Vec<DateRange> {
        vec![self.constrain_to_one_day(self.contiguous.map_one(cell))]
    }
}
