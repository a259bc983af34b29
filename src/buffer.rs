//! ID-addressed ring buffer
//!
//! A fixed number of slots reused cyclically. Every item written gets the
//! next integer ID; the item for ID `i` lives in slot `i % capacity` until a
//! newer ID claims that slot.
//!
//! ```text
//!   capacity = 4, after pushing ids 0..=5
//!
//!   slot:     0      1      2      3
//!          ┌──────┬──────┬──────┬──────┐
//!   id:    │  4   │  5   │  2   │  3   │
//!          └──────┴──────┴──────┴──────┘
//!                    ▲      ▲
//!                 newest  oldest
//! ```
//!
//! All cursors and slots sit behind one `parking_lot::RwLock`. Reads take the
//! shared guard, `push`/`upsert_by_id` take the exclusive guard, and the
//! guard is dropped on every return path.

use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::RingConfig;
use crate::errors::RingError;

/// Logical item identifier. Signed so an empty buffer can report `-1`.
pub type Id = i64;

/// Cursors and storage, only ever touched through the lock.
struct Slots<T> {
    slots: Vec<Option<T>>,
    oldest: Id,
    newest: Id,
}

impl<T> Slots<T> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            oldest: 0,
            newest: -1,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot_of(&self, id: Id) -> usize {
        id.rem_euclid(self.capacity() as Id) as usize
    }

    fn is_empty(&self) -> bool {
        self.newest < self.oldest
    }

    /// Move `newest` forward one ID, evicting the oldest once the window is full.
    fn advance(&mut self) {
        self.newest += 1;
        if self.newest >= self.capacity() as Id {
            self.oldest += 1;
        }
    }

    fn push(&mut self, value: Option<T>) {
        self.advance();
        let slot = self.slot_of(self.newest);
        self.slots[slot] = value;
    }

    /// Blank every ID in `(newest, id)` and leave `newest` at `id - 1`.
    ///
    /// Only the last `capacity` of those IDs can still own a slot afterwards,
    /// so wider gaps cost the same as a full lap.
    fn fill_gap_before(&mut self, id: Id) {
        let cap = self.capacity() as Id;
        let first = (self.newest + 1).max(id - cap);
        for gap in first..id {
            let slot = self.slot_of(gap);
            self.slots[slot] = None;
        }
        trace!(from = self.newest + 1, to = id - 1, "filled gap with placeholders");
        self.newest = id - 1;
        self.oldest = self.oldest.max(self.newest + 1 - cap);
    }

    fn lookup(&self, id: Id) -> Result<&Option<T>, RingError> {
        if id < self.oldest {
            return Err(RingError::IdTooOld {
                id,
                oldest: self.oldest,
            });
        }
        if id > self.newest {
            return Err(RingError::IdTooNew {
                id,
                newest: self.newest,
            });
        }
        Ok(&self.slots[self.slot_of(id)])
    }
}

/// A fixed-capacity circular buffer addressed by ID and by slot index.
///
/// Share it between threads with `Arc<RingBuffer<T>>`; every method takes
/// `&self`.
pub struct RingBuffer<T> {
    inner: RwLock<Slots<T>>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> RingBuffer<T> {
    /// Create a buffer with `capacity` empty slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`RingBuffer::try_new`] when the
    /// capacity comes from outside the program.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be > 0");
        Self::build(capacity)
    }

    /// Create a buffer, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self::build(capacity))
    }

    /// Create a buffer from a validated [`RingConfig`].
    pub fn from_config(config: &RingConfig) -> Result<Self, RingError> {
        config.validate()?;
        Ok(Self::build(config.capacity))
    }

    fn build(capacity: usize) -> Self {
        debug!(capacity, "created ring buffer");
        Self {
            inner: RwLock::new(Slots::with_capacity(capacity)),
        }
    }

    /// Append `value` under the next ID, evicting the oldest item when full.
    pub fn push(&self, value: T) {
        let mut inner = self.inner.write();
        inner.push(Some(value));
        trace!(oldest = inner.oldest, newest = inner.newest, "pushed");
    }

    /// Write `value` at `id`.
    ///
    /// IDs inside `[oldest, newest]` are overwritten in place. IDs past
    /// `newest` advance the buffer, and any skipped IDs read back as `None`.
    pub fn upsert_by_id(&self, id: Id, value: T) -> Result<(), RingError> {
        let mut inner = self.inner.write();

        if id < inner.oldest {
            return Err(RingError::StaleId {
                id,
                oldest: inner.oldest,
            });
        }

        if id > inner.newest {
            if id > inner.newest + 1 {
                inner.fill_gap_before(id);
            }
            inner.push(Some(value));
        } else {
            let slot = inner.slot_of(id);
            inner.slots[slot] = Some(value);
        }

        trace!(id, oldest = inner.oldest, newest = inner.newest, "upserted");
        Ok(())
    }

    /// ID of the oldest retained item.
    pub fn get_oldest_id(&self) -> Id {
        self.inner.read().oldest
    }

    /// ID of the newest item, `-1` before anything was written.
    pub fn get_newest_id(&self) -> Id {
        self.inner.read().newest
    }

    /// `(oldest, newest)` read under a single guard.
    pub fn bounds(&self) -> (Id, Id) {
        let inner = self.inner.read();
        (inner.oldest, inner.newest)
    }

    /// Total number of slots.
    ///
    /// This is the fixed capacity, not the number of items currently
    /// retained. `newest - oldest + 1` gives the latter.
    pub fn len(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }
}

impl<T: Clone> RingBuffer<T> {
    /// The newest item, or `None` when nothing has been written.
    pub fn get(&self) -> Option<T> {
        let inner = self.inner.read();
        if inner.is_empty() {
            return None;
        }
        inner.slots[inner.slot_of(inner.newest)].clone()
    }

    /// The item stored for `id`.
    ///
    /// `Ok(None)` means the ID is live but was only ever gap-filled.
    pub fn get_by_id(&self, id: Id) -> Result<Option<T>, RingError> {
        let inner = self.inner.read();
        inner.lookup(id).cloned()
    }

    /// Raw content of physical slot `index`, with no ID bounds check.
    pub fn get_by_index(&self, index: usize) -> Result<Option<T>, RingError> {
        let inner = self.inner.read();
        inner
            .slots
            .get(index)
            .cloned()
            .ok_or(RingError::IndexOutOfBounds {
                index,
                capacity: inner.capacity(),
            })
    }

    /// Every item with an ID in `(id, newest]`, oldest first.
    ///
    /// An `id` below the retained window is treated as "everything retained".
    pub fn get_newer_by_id(&self, id: Id) -> Result<Vec<Option<T>>, RingError> {
        let inner = self.inner.read();

        let from = if id < inner.oldest { inner.oldest - 1 } else { id };
        if from > inner.newest {
            return Err(RingError::RequestedIdTooNew {
                id: from,
                newest: inner.newest,
            });
        }

        Ok(((from + 1)..=inner.newest)
            .map(|i| inner.slots[inner.slot_of(i)].clone())
            .collect())
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("RingBuffer")
            .field("capacity", &inner.capacity())
            .field("oldest", &inner.oldest)
            .field("newest", &inner.newest)
            .finish()
    }
}
