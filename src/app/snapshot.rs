//! Loading state snapshots from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::state::AppState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read state snapshot '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state snapshot '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AppState {
    /// Load a JSON snapshot. Missing subtrees fall back to their defaults.
    pub fn load_snapshot(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| SnapshotError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_snapshot_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"chat": {{"inbox": [{{"conversation_id": "a", "is_empty": false}}]}}}}"#
        )
        .unwrap();

        let state = AppState::load_snapshot(file.path()).unwrap();
        assert_eq!(state.chat.inbox.len(), 1);
        assert!(state.devices.device_ids.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AppState::load_snapshot(Path::new("/nonexistent/state.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::ReadError { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = AppState::load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::ParseError { .. }));
    }
}
