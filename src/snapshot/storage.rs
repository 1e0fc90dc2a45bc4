use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::{Snapshot, SNAPSHOT_VERSION};
use crate::record::InputRecord;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to access snapshot at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("snapshot at {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Default snapshot path (~/.config/teacher-eval/state.json)
pub fn get_snapshot_path() -> anyhow::Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("state.json"))
}

/// Load a snapshot from a JSON file.
///
/// A missing file is not an error: it returns `Ok(None)`. A file that exists
/// but cannot be parsed, or carries an unknown version, is an error.
pub fn load_snapshot(path: &Path) -> Result<Option<Snapshot>, SnapshotError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot saved yet");
        return Ok(None);
    }

    let file = File::open(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: Snapshot =
        serde_json::from_reader(io::BufReader::new(file)).map_err(|source| {
            SnapshotError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;

    // Version check
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }

    tracing::info!(path = %path.display(), saved_at = %snapshot.saved_at, "snapshot loaded");
    Ok(Some(snapshot))
}

/// Save a record as a snapshot, atomically.
///
/// The file is never left half-written. Missing parent directories are
/// created.
pub fn save_snapshot(path: &Path, record: &InputRecord) -> Result<Snapshot, SnapshotError> {
    let io_err = |source: io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let snapshot = Snapshot::new(record.clone());

    let mut file = AtomicWriteFile::open(path).map_err(io_err)?;

    // Write JSON with pretty formatting
    serde_json::to_writer_pretty(&mut file, &snapshot).map_err(SnapshotError::Encode)?;

    // Commit the write atomically
    file.commit().map_err(io_err)?;

    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(snapshot)
}
