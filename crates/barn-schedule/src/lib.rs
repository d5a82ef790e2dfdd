//! # barn-schedule
//!
//! Due-date projection and time-relative grouping of scheduled events.
//!
//! | Operation | Module |
//! |-----------|--------|
//! | Suggest next due date from the cycle policy | `projector` |
//! | Group due events into Overdue / This Week / This Month / Upcoming | `buckets` |
//! | Record an occurrence, resolve it, and project its follow-up | `completion` |
//! | Per-entity next-due and overdue views | `summary` |
//!
//! Every operation takes "now" as an argument; nothing here reads the clock.

pub mod buckets;
pub mod completion;
pub mod engine;
pub mod projector;
pub mod summary;

pub use buckets::{bucketize, BucketHorizons};
pub use completion::{complete_event, Completion};
pub use engine::ScheduleEngine;
pub use projector::{apply_offset, suggest_next_due, try_suggest_next_due};
