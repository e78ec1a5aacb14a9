use chrono::Duration;

use crate::models::geometry::CellInfo;
use crate::models::range::DateRange;

use super::MappingOptions;

const MINS_PER_DAY: f64 = 24.0 * 60.0;

/// Maps a date range back onto the grid, one cell block per visible day.
#[derive(Debug, Clone)]
pub struct RangeToCells {
    options: MappingOptions,
    num_horizontal_cells: u32,
    num_vertical_cells: u32,
}

impl RangeToCells {
    pub fn new(
        options: MappingOptions,
        num_horizontal_cells: u32,
        num_vertical_cells: u32,
    ) -> Self {
        Self {
            options,
            num_horizontal_cells,
            num_vertical_cells,
        }
    }

    /// Cell blocks covered by `range`, one per column it touches.
    ///
    /// Rows are measured from the start of each column, so a column spanning
    /// several days yields a single block. Columns outside the grid are
    /// dropped; rows are clamped.
    pub fn cells_for_range(&self, range: &DateRange) -> Vec<CellInfo> {
        let origin = self.options.origin;
        let mut cells = Vec::new();
        let mut cursor = range.start().max(origin);

        while cursor < range.end() {
            let day = (minutes_between(origin, cursor) / MINS_PER_DAY).floor();
            let column = self.options.units.to_x(day).floor();
            if column >= self.num_horizontal_cells as f64 {
                break;
            }

            let column = column.max(0.0) as u32;
            let column_start = origin + Duration::days(self.options.units.to_day(column));
            let column_end = origin + Duration::days(self.options.units.to_day(column + 1));
            let segment_end = range.end().min(column_end);
            if segment_end <= cursor {
                break;
            }

            let top = self.options.units.to_y(minutes_between(column_start, cursor));
            let bottom = self.options.units.to_y(minutes_between(column_start, segment_end));
            let start_y = self.clamp_row(top.floor());
            let end_y = self.clamp_row(bottom.ceil() - 1.0).max(start_y);
            cells.push(CellInfo::new(range.id, column, start_y, column, end_y));

            cursor = segment_end;
        }

        cells
    }

    fn clamp_row(&self, row: f64) -> u32 {
        if row <= 0.0 {
            return 0;
        }
        (row as u32).min(self.num_vertical_cells - 1)
    }
}

fn minutes_between(from: chrono::NaiveDateTime, to: chrono::NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 60.0
}
