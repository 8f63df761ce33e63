pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, EditorState, Focus, Mode, SaveStatus};
pub use calendar::{Category, Event, EventStore, StoreError};
pub use storage::{JsonSnapshotFile, SnapshotStore};

pub use input::{command_mode, filter_mode, insert_mode, normal_mode};
