use crate::OpenAction;

use std::{fmt, str::FromStr};

use uuid::Uuid;

/// What a menu item does when clicked.
///
/// Every action has a stable string id so a tray host can use it as the
/// native menu item id and parse it back from the click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Prompt for a folder and append it.
    AddFolder,
    /// Open a bookmark.
    Open {
        /// Bookmark to open.
        id: Uuid,
        /// How to open it.
        action: OpenAction,
    },
    /// Delete a bookmark.
    Remove {
        /// Bookmark to delete.
        id: Uuid,
    },
    /// Exit the application.
    Quit,
}

impl MenuAction {
    /// String form, e.g. `add`, `open/editor/<uuid>`, `remove/<uuid>`.
    pub fn menu_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::AddFolder => f.write_str("add"),
            MenuAction::Open { id, action } => write!(f, "open/{}/{}", action, id),
            MenuAction::Remove { id } => write!(f, "remove/{}", id),
            MenuAction::Quit => f.write_str("quit"),
        }
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_id =
            |raw: &str| Uuid::parse_str(raw).map_err(|e| format!("bad bookmark id '{}': {}", raw, e));

        let parts: Vec<&str> = s.split('/').collect();

        match parts[..] {
            ["add"] => Ok(MenuAction::AddFolder),
            ["quit"] => Ok(MenuAction::Quit),
            ["open", action, id] => Ok(MenuAction::Open {
                id: parse_id(id)?,
                action: OpenAction::from_str(action)?,
            }),
            ["remove", id] => Ok(MenuAction::Remove { id: parse_id(id)? }),
            _ => Err(format!("unknown menu id '{}'", s)),
        }
    }
}
