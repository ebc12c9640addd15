use std::{fmt, str::FromStr};

/// The three ways a bookmarked folder can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAction {
    /// OS file manager.
    FileManager,
    /// Code editor.
    Editor,
    /// Terminal started in the folder.
    Terminal,
}

impl OpenAction {
    /// All actions in menu order.
    pub const ALL: [OpenAction; 3] = [
        OpenAction::FileManager,
        OpenAction::Editor,
        OpenAction::Terminal,
    ];

    /// Stable name used in menu ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenAction::FileManager => "file-manager",
            OpenAction::Editor => "editor",
            OpenAction::Terminal => "terminal",
        }
    }
}

impl FromStr for OpenAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file-manager" => Ok(OpenAction::FileManager),
            "editor" => Ok(OpenAction::Editor),
            "terminal" => Ok(OpenAction::Terminal),
            other => Err(format!("unknown open action '{}'", other)),
        }
    }
}

impl fmt::Display for OpenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
