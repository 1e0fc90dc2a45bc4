pub mod storage;
pub mod types;

pub use storage::{get_snapshot_path, load_snapshot, save_snapshot, SnapshotError};
pub use types::{Snapshot, SNAPSHOT_VERSION};
