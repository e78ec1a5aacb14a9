// Schedule service
// Committed ranges, pending-selection previews and id-checked edits

mod edit;

pub use edit::{drag_cell_to, nudge_cell};

use uuid::Uuid;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::geometry::CellInfo;
use crate::models::range::{DateRange, Event};
use crate::services::mapping::CellMapping;
use crate::services::merge::merge_events;

/// The committed schedule, kept sorted by start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    ranges: Event,
}

impl Schedule {
    pub fn new(mut ranges: Vec<DateRange>) -> Self {
        ranges.sort_by_key(|range| range.start());
        Self { ranges }
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&DateRange> {
        self.ranges.iter().find(|range| range.id == id)
    }

    /// What the schedule would look like with `pending` merged in.
    pub fn preview(&self, pending: &[DateRange]) -> Vec<DateRange> {
        merge_events(&self.ranges, Some(pending))
    }

    /// Merge a finished selection into the schedule.
    pub fn commit(&mut self, pending: &[DateRange]) {
        self.ranges = self.preview(pending);
        log::info!("Committed {} ranges; schedule now holds {}", pending.len(), self.ranges.len());
    }

    /// Replace (`Some`) or delete (`None`) the range with `id`, then
    /// re-merge the schedule.
    ///
    /// An unknown id or a mapper that does not yield exactly one range is an
    /// integration error and leaves the schedule untouched.
    pub fn apply_change(
        &mut self,
        id: Uuid,
        change: Option<&CellInfo>,
        mapper: &dyn CellMapping,
    ) -> SchedulerResult<()> {
        let index = self
            .ranges
            .iter()
            .position(|range| range.id == id)
            .ok_or(SchedulerError::UnknownRange(id))?;

        let mut updated = self.ranges.clone();
        match change {
            Some(cell) => {
                let mut range = single_range(mapper, cell)?;
                range.id = id;
                updated[index] = range;
            }
            None => {
                updated.remove(index);
            }
        }

        // Ids follow position in the merged output, so the input must be in
        // start order too or a move past a neighbour swaps their ids.
        updated.sort_by_key(|range| range.start());
        self.ranges = merge_events(&updated, Some(&[]));
        log::debug!("Applied change to range {}", id);
        Ok(())
    }
}

/// Map an edited cell, insisting on exactly one resulting range.
pub fn single_range(mapper: &dyn CellMapping, cell: &CellInfo) -> SchedulerResult<DateRange> {
    let mut ranges = mapper.map_cell(cell);
    if ranges.len() != 1 {
        return Err(SchedulerError::UnexpectedRangeCount(ranges.len()));
    }
    Ok(ranges.remove(0))
}
