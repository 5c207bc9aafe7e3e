//! Writing a captured session out as a text file.
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::store::{HandAccumulator, StoreError};

const FILE_PREFIX: &str = "poker_session_";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export: {0}")]
    Store(#[from] StoreError),

    #[error("Error exporting caused by IO error")]
    Io(#[from] std::io::Error),
}

/// File name for a session exported at `now`.
pub fn session_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.txt", FILE_PREFIX, now.timestamp_millis())
}

/// Write every stored hand to a new session file in `dir`.
///
/// The directory is created if needed. Returns the path written.
pub fn write_session(
    store: &HandAccumulator,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let text = store.export_all()?;

    if !dir.exists() {
        debug!(?dir, "Creating directory for session export");
        std::fs::create_dir_all(dir)?;
    }

    let path = dir.join(session_file_name(now));
    let mut file = File::create(&path)?;
    file.write_all(text.as_bytes())?;

    info!(?path, hands = store.len(), "Exported session");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;
    use crate::translate::HandTranslator;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_session_file_name() {
        assert_eq!("poker_session_1700000000123.txt", session_file_name(now()));
    }

    #[test]
    fn test_write_empty_store_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = HandAccumulator::new();

        let result = write_session(&store, temp_dir.path(), now());
        assert!(matches!(result, Err(ExportError::Store(StoreError::EmptyStore))));
        assert_eq!(0, std::fs::read_dir(temp_dir.path()).unwrap().count());
    }

    #[test_log::test]
    fn test_write_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("sessions");

        let translator = HandTranslator::default();
        let mut store = HandAccumulator::new();
        let lines = ["Hand #3", "Dealt A♠K♠ Preflop", "P1 collects 3 from pot"];
        store.insert(
            translator
                .translate_at(&lines.join("\n"), lines, now())
                .unwrap(),
        );

        let path = write_session(&store, &out, now()).unwrap();
        assert_eq!(out.join("poker_session_1700000000123.txt"), path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(store.export_all().unwrap(), content);
    }
}
