pub mod category;
pub mod cost;
pub mod event;
pub mod tracked;

pub use category::EventCategory;
pub use cost::Cost;
pub use event::ScheduledEvent;
pub use tracked::TrackedEntity;
