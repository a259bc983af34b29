//! idring - a sliding window of the most recent N items, addressed by ID
//!
//! A fixed-capacity circular buffer for things that arrive with increasing
//! integer IDs (protocol rounds, periodic updates) where callers need to:
//!
//! - **Append**: `push` the next item, evicting the oldest once full
//! - **Upsert**: write at a recent or future ID, gap-filling skipped IDs
//! - **Query**: by ID, by physical slot, or everything newer than an ID
//!
//! The buffer is payload-agnostic and safe to share between threads; reads
//! take a shared lock and writes an exclusive one.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use idring::{RingBuffer, RingError};
//!
//! let rounds = Arc::new(RingBuffer::new(3));
//! for round in ["A", "B", "C", "D"] {
//!     rounds.push(round);
//! }
//!
//! assert_eq!(rounds.bounds(), (1, 3));
//! assert_eq!(rounds.get(), Some("D"));
//! assert_eq!(rounds.get_newer_by_id(1)?, vec![Some("C"), Some("D")]);
//! assert!(matches!(rounds.get_by_id(0), Err(RingError::IdTooOld { .. })));
//! # Ok::<(), RingError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod errors;

pub use buffer::{Id, RingBuffer};
pub use config::RingConfig;
pub use errors::RingError;
