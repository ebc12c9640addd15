use std::path::Path;

use uuid::Uuid;

/// A remembered filesystem folder shown as one entry in the tray menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Stable identifier assigned when the bookmark is created.
    pub id: Uuid,
    /// Absolute path of the folder.
    pub path: String,
    /// Display label.
    pub name: String,
}

impl Bookmark {
    /// Create a bookmark for `path`, naming it after the final path segment.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name(&path);

        Self {
            id: Uuid::new_v4(),
            path,
            name,
        }
    }

    /// Create a bookmark with an explicit display label.
    pub fn with_name(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Final path segment of `path`, or the whole path when it has none (`/`, `C:\`).
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
