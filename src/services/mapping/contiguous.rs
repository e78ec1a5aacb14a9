use crate::models::geometry::CellInfo;
use crate::models::range::DateRange;

use super::{CellMapping, MappingOptions};

/// Maps a cell block to one range running from its first corner to its last.
#[derive(Debug, Clone)]
pub struct ContiguousMapping {
    options: MappingOptions,
}

impl ContiguousMapping {
    pub fn new(options: MappingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    /// The single range for `cell`, endpoints swapped when the end corner
    /// resolves to an earlier instant (upward or leftward drags).
    pub fn map_one(&self, cell: &CellInfo) -> DateRange {
        let start = self.options.cell_to_date(cell.start_x, cell.start_y);
        let mut end = self.options.cell_to_date(cell.end_x, cell.end_y);

        // Both corners on the same instant: give the range one row.
        if end == start {
            end = start + self.options.row_duration();
        }

        DateRange::new(cell.id, start, end)
    }
}

impl CellMapping for ContiguousMapping {
    fn map_cell(&self, cell: &CellInfo) -> Vec<DateRange> {
        vec![self.map_one(cell)]
    }
}
