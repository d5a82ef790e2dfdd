//! # barn-core
//!
//! Foundation crate for the barn maintenance engine.
//! Defines the tracked-entity model, the cycle policy table, derived view
//! models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod models;
pub mod policy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BarnConfig;
pub use entity::{Cost, EventCategory, ScheduledEvent, TrackedEntity};
pub use errors::{BarnError, BarnResult};
pub use policy::{CalendarUnit, CyclePolicy, RecurrenceOffset};
