// Range module
// A single booked time range and the event built from a run of them

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identified `[start, end]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub id: Uuid,
    pub value: (NaiveDateTime, NaiveDateTime),
}

/// One logical booking: date ranges ordered by start.
pub type Event = Vec<DateRange>;

impl DateRange {
    /// Create a range; endpoints given in reverse order are swapped.
    ///
    /// # Examples
    /// ```
    /// use weekly_scheduler::models::range::DateRange;
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let day = NaiveDate::from_ymd_opt(2019, 3, 4).unwrap();
    /// let nine = day.and_hms_opt(9, 0, 0).unwrap();
    /// let ten = day.and_hms_opt(10, 0, 0).unwrap();
    /// let range = DateRange::new(Uuid::new_v4(), ten, nine);
    /// assert_eq!(range.value, (nine, ten));
    /// ```
    pub fn new(id: Uuid, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let value = if start <= end { (start, end) } else { (end, start) };
        Self { id, value }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.value.0
    }

    pub fn end(&self) -> NaiveDateTime {
        self.value.1
    }

    pub fn duration(&self) -> chrono::Duration {
        self.value.1 - self.value.0
    }
}
