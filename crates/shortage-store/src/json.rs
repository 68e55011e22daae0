//! JSON file store implementation

use shortage_api::Shortage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{RecordStore, StoreResult};

/// Stores the collection as a pretty-printed JSON array.
///
/// Saves go to a sibling temporary file that is then renamed over the
/// target, so readers never observe a half-written document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Shortage>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        let records: Vec<Shortage> = serde_json::from_str(&content)?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "Shortages loaded"
        );
        Ok(Some(records))
    }

    fn save(&self, records: &[Shortage]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        debug!(
            path = %self.path.display(),
            count = records.len(),
            "Shortages saved"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
