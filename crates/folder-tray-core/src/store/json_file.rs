//! File-backed key-value store.
//!
//! The whole store is one JSON object whose values are all strings. Every
//! read goes to disk so edits made outside the process are picked up, and
//! every write replaces the file atomically.

use crate::{CoreError, CoreResult, store::KeyValueStore};

use std::{
    collections::BTreeMap,
    fs,
    io::{ErrorKind, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Key-value store persisted as a JSON object of strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn read_map(&self) -> CoreResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| CoreError::StoreCorrupt {
            reason: format!("{} is not a JSON object of strings: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Write to a temporary sibling, sync, then rename over the target.
    #[track_caller]
    fn write_map(&self, map: &BTreeMap<String, String>) -> CoreResult<()> {
        let contents = serde_json::to_string_pretty(map).map_err(|e| CoreError::Serialize {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            debug!(dir = ?parent, "Created store directory");
        }

        let temp_path = self.path.with_extension("json.tmp");

        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    #[instrument(skip(self), fields(path = ?self.path))]
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    #[instrument(skip(self, value), fields(path = ?self.path, len = value.len()))]
    fn set(&mut self, key: &str, value: String) -> CoreResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)?;

        debug!("Store written (atomic write)");

        Ok(())
    }
}
