pub mod event;
pub mod store;

pub use event::{derive_event_id, Category, Event, EventId};
pub use store::{EventStore, EventSubmission, StoreError};
