use chrono::Duration;
use uuid::Uuid;

use crate::models::geometry::CellInfo;
use crate::models::range::DateRange;
use crate::utils::date::{end_of_day, is_midnight};

use super::{CellMapping, MappingOptions};

/// Maps a cell block to one range per day column, each covering the same rows.
#[derive(Debug, Clone)]
pub struct RecurringMapping {
    options: MappingOptions,
}

impl RecurringMapping {
    pub fn new(options: MappingOptions) -> Self {
        Self { options }
    }
}

impl CellMapping for RecurringMapping {
    /// The first column keeps the cell's id; later columns get fresh ids so
    /// each occurrence can be edited on its own.
    fn map_cell(&self, cell: &CellInfo) -> Vec<DateRange> {
        let length = Duration::minutes(self.options.units.to_min(cell.span_y));

        let mut ranges: Vec<DateRange> = (cell.start_x..=cell.end_x)
            .map(|column| {
                let start = self.options.cell_to_date(column, cell.start_y);
                let mut end = start + length;

                // Ending on midnight would spill into the next column's day
                if is_midnight(end) {
                    end = end_of_day(end - Duration::days(1));
                }

                let id = if column == cell.start_x {
                    cell.id
                } else {
                    Uuid::new_v4()
                };
                DateRange::new(id, start, end)
            })
            .collect();

        // Stable: equal starts keep column order
        ranges.sort_by_key(|range| range.start());
        ranges
    }
}
