pub mod config;
pub mod snapshot;

pub use config::{Config, ConfigError};
pub use snapshot::{JsonSnapshotFile, SnapshotError, SnapshotStore, SNAPSHOT_FILE};
