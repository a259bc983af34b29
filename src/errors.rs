use thiserror::Error;

use crate::buffer::Id;

/// Errors returned by [`RingBuffer`](crate::RingBuffer) operations.
///
/// Every variant is a recoverable misuse of the ID or index range. Each one
/// carries the requested value and the bound it was checked against so the
/// caller can decide whether to retry, drop, or escalate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    #[error("Did not upsert id {id}: older than the oldest tracked id {oldest}")]
    StaleId { id: Id, oldest: Id },

    #[error("Requested id {id} is lower than the oldest id {oldest}")]
    IdTooOld { id: Id, oldest: Id },

    #[error("Requested id {id} is higher than the newest id {newest}")]
    IdTooNew { id: Id, newest: Id },

    #[error("Could not get item at index {index}: out of bounds for capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("Requested id {id} is higher than the newest id {newest}")]
    RequestedIdTooNew { id: Id, newest: Id },

    #[error("Ring buffer capacity must be greater than zero")]
    ZeroCapacity,
}

impl RingError {
    /// The request targeted an ID that has already been evicted.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleId { .. } | Self::IdTooOld { .. })
    }

    /// The request targeted an ID that has not been written yet.
    ///
    /// These may succeed later once the buffer catches up, so they are
    /// the retryable ones.
    pub fn is_future(&self) -> bool {
        matches!(self, Self::IdTooNew { .. } | Self::RequestedIdTooNew { .. })
    }
}
