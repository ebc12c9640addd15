//! Per-platform launch commands for the three open actions.
//!
//! Templates render to argv arrays. The folder path always lands in exactly
//! one argument and nothing here ever goes through a shell.

use crate::{OpenAction, Platform};

use std::collections::BTreeMap;

/// One argument of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgTemplate {
    /// Passed through unchanged.
    Literal(String),
    /// Replaced by the folder path.
    Path,
    /// The prefix immediately followed by the folder path, as one argument.
    PrefixedPath(String),
}

/// Program plus argument templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<ArgTemplate>,
}

impl CommandTemplate {
    /// Template for `program` with no arguments yet.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a literal argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(ArgTemplate::Literal(arg.into()));
        self
    }

    /// Append the folder path as its own argument.
    pub fn path(mut self) -> Self {
        self.args.push(ArgTemplate::Path);
        self
    }

    /// Append `prefix` + folder path as a single argument.
    pub fn prefixed_path(mut self, prefix: impl Into<String>) -> Self {
        self.args.push(ArgTemplate::PrefixedPath(prefix.into()));
        self
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render into a concrete argv for `path`.
    pub fn render(&self, path: &str) -> LaunchCommand {
        let args = self
            .args
            .iter()
            .map(|arg| match arg {
                ArgTemplate::Literal(value) => value.clone(),
                ArgTemplate::Path => path.to_string(),
                ArgTemplate::PrefixedPath(prefix) => format!("{}{}", prefix, path),
            })
            .collect();

        LaunchCommand {
            program: self.program.clone(),
            args,
        }
    }
}

/// Concrete process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Executable looked up on `PATH`.
    pub program: String,
    /// Arguments, each passed to the OS verbatim.
    pub args: Vec<String>,
}

/// Templates for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCommands {
    /// Opens the folder in the file manager.
    pub file_manager: CommandTemplate,
    /// Opens the folder in the code editor.
    pub editor: CommandTemplate,
    /// Opens a terminal in the folder.
    pub terminal: CommandTemplate,
}

impl PlatformCommands {
    /// Template for `action`.
    pub fn get(&self, action: OpenAction) -> &CommandTemplate {
        match action {
            OpenAction::FileManager => &self.file_manager,
            OpenAction::Editor => &self.editor,
            OpenAction::Terminal => &self.terminal,
        }
    }

    fn linux() -> Self {
        Self {
            file_manager: CommandTemplate::new("xdg-open").path(),
            editor: CommandTemplate::new("code").path(),
            terminal: CommandTemplate::new("gnome-terminal").prefixed_path("--working-directory="),
        }
    }

    fn win32() -> Self {
        Self {
            file_manager: CommandTemplate::new("explorer").path(),
            // The VS Code launcher on Windows is a batch file.
            editor: CommandTemplate::new("code.cmd").path(),
            terminal: CommandTemplate::new("wt").arg("-d").path(),
        }
    }

    fn darwin() -> Self {
        Self {
            file_manager: CommandTemplate::new("open").path(),
            editor: CommandTemplate::new("code").path(),
            terminal: CommandTemplate::new("open").arg("-a").arg("Terminal").path(),
        }
    }
}

/// Static mapping from platform identifier to launch templates.
///
/// Unknown platforms resolve to the fallback row, which is the Linux row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCommandTable {
    rows: BTreeMap<String, PlatformCommands>,
    fallback: PlatformCommands,
}

impl Default for PlatformCommandTable {
    fn default() -> Self {
        let mut rows = BTreeMap::new();
        rows.insert(Platform::Linux.identifier().to_string(), PlatformCommands::linux());
        rows.insert(Platform::Win32.identifier().to_string(), PlatformCommands::win32());
        rows.insert(Platform::Darwin.identifier().to_string(), PlatformCommands::darwin());

        Self {
            rows,
            fallback: PlatformCommands::linux(),
        }
    }
}

impl PlatformCommandTable {
    /// Row for `platform`, or the fallback row.
    pub fn commands(&self, platform: &Platform) -> &PlatformCommands {
        self.rows
            .get(platform.identifier())
            .unwrap_or(&self.fallback)
    }

    /// Template for `action` on `platform`.
    pub fn template(&self, platform: &Platform, action: OpenAction) -> &CommandTemplate {
        self.commands(platform).get(action)
    }

    /// True when `platform` has its own row.
    pub fn is_known(&self, platform: &Platform) -> bool {
        self.rows.contains_key(platform.identifier())
    }

    /// Use `program` as the editor on every platform, keeping its arguments.
    pub fn with_editor_program(mut self, program: impl Into<String>) -> Self {
        let program = program.into();
        for row in self.rows.values_mut().chain(std::iter::once(&mut self.fallback)) {
            row.editor.program = program.clone();
        }
        self
    }
}
