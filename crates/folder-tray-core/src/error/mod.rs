use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Bookmark registry and dispatch errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The persisted value could not be deserialized.
    #[error("Stored bookmarks are corrupt: {reason} {location}")]
    StoreCorrupt {
        /// Description of the decoding failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Filesystem operation on the backing store failed.
    #[error("Store IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The bookmark list could not be serialized.
    #[error("Failed to serialize bookmarks: {source} {location}")]
    Serialize {
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A folder path that is empty or not absolute.
    #[error("Invalid folder path '{path}': must be absolute {location}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An external program could not be started.
    #[error("Failed to launch {program}: {source} {location}")]
    LaunchFailed {
        /// Program that was being launched.
        program: String,
        /// The spawn error reported by the OS.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No bookmark with the given id exists in the current list.
    #[error("Bookmark {id} not found {location}")]
    BookmarkNotFound {
        /// Identifier that was looked up.
        id: Uuid,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The menu host rejected a rebuilt menu.
    #[error("Failed to attach menu: {reason} {location}")]
    MenuAttachFailed {
        /// Description of the host failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for CoreError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CoreError::Io {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
