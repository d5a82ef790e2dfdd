//! # barn-blanket
//!
//! Maps an air temperature (°F) and coat state to a blanket tier.
//!
//! | Temp (°F) | Unclipped | Clipped |
//! |-----------|-----------|---------|
//! | > 60 | None | None or Light |
//! | 50 – 60 | None | Light Sheet |
//! | 40 – <50 | Light Sheet | Medium Weight |
//! | 30 – <40 | Medium Weight | Heavyweight |
//! | < 30 | Heavyweight | Heavyweight + Liner |
//!
//! Lower edges are inclusive; 60 °F itself belongs to the 50–60 row.
//! No hysteresis or smoothing: every call is an independent lookup.

pub mod advisor;
pub mod ladder;

pub use advisor::BlanketAdvisor;
pub use ladder::{classify, TemperatureBracket};
