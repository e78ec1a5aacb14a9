// Scheduler errors
// Invariant violations raised when the editing layer hands the core inconsistent state

use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the scheduling core.
///
/// Out-of-range pixels and grid indices are never errors (they are clamped);
/// everything here means the caller passed state that cannot be reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A move changed how many rows a cell covers.
    #[error("expected the moved cell to keep its row span ({expected}), found {found}")]
    SpanChanged { expected: u32, found: u32 },

    /// An edit referenced a range that is not part of the schedule.
    #[error("expected range {0} to have a matching id in the schedule")]
    UnknownRange(Uuid),

    /// A mapper produced more (or fewer) ranges than an edit can hold.
    #[error("expected a single date range for an edited cell, found {0}")]
    UnexpectedRangeCount(usize),

    /// Container or cell-count dimensions that cannot form a grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration values that cannot drive a grid or mapping.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
