use crate::{Bookmark, BookmarkList, CoreError, CoreResult, store::KeyValueStore};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Key holding the serialized bookmark list.
pub const FOLDERS_KEY: &str = "folders";

/// Namespace for ids derived for records written before ids were stored.
const LEGACY_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1d_2c3a_8b4e_4f70_9a51_0c7e_d2b8_3f19);

/// On-disk record. `id` is absent in payloads from older versions.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBookmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    path: String,
    name: String,
}

/// Durable bookmark list persisted as a JSON array string under [`FOLDERS_KEY`].
pub struct BookmarkStore {
    backend: Box<dyn KeyValueStore>,
}

impl BookmarkStore {
    /// Wrap a key-value backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load the list. Missing or empty data is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StoreCorrupt`] when the stored value does not
    /// deserialize, rather than treating it as empty.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn load(&self) -> CoreResult<BookmarkList> {
        let Some(payload) = self.backend.get(FOLDERS_KEY)? else {
            debug!("No stored bookmarks");
            return Ok(BookmarkList::new());
        };

        if payload.trim().is_empty() {
            return Ok(BookmarkList::new());
        }

        let records: Option<Vec<StoredBookmark>> =
            serde_json::from_str(&payload).map_err(|e| CoreError::StoreCorrupt {
                reason: format!("Failed to parse '{}': {}", FOLDERS_KEY, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let list: BookmarkList = records
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, record)| Bookmark {
                id: record
                    .id
                    .unwrap_or_else(|| legacy_id(index, &record.path)),
                path: record.path,
                name: record.name,
            })
            .collect();

        debug!(count = list.len(), "Bookmarks loaded");

        Ok(list)
    }

    /// Serialize the whole list and replace the stored value.
    #[track_caller]
    #[instrument(skip(self, list), fields(count = list.len()))]
    pub fn save(&mut self, list: &BookmarkList) -> CoreResult<()> {
        let records: Vec<StoredBookmark> = list
            .iter()
            .map(|b| StoredBookmark {
                id: Some(b.id),
                path: b.path.clone(),
                name: b.name.clone(),
            })
            .collect();

        let payload = serde_json::to_string(&records).map_err(|e| CoreError::Serialize {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.backend.set(FOLDERS_KEY, payload)?;

        debug!("Bookmarks saved");

        Ok(())
    }

    /// Raw stored payload, exactly as persisted.
    pub fn raw(&self) -> CoreResult<Option<String>> {
        self.backend.get(FOLDERS_KEY)
    }
}

/// Deterministic id for a record without one, stable until the next save.
fn legacy_id(index: usize, path: &str) -> Uuid {
    Uuid::new_v5(
        &LEGACY_ID_NAMESPACE,
        format!("{}:{}", index, path).as_bytes(),
    )
}
