mod category;
mod event_datetime;
mod summary;

pub use category::{resolve_category, OTHER_CATEGORY};
pub use event_datetime::{parse_event_datetime, ValidationError};
pub use summary::EventSummary;
