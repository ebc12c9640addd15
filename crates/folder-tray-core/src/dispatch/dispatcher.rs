use crate::{
    Bookmark, CoreError, CoreResult, LaunchCommand, OpenAction, Platform, PlatformCommandTable,
    dispatch::{Launcher, SystemLauncher},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Maps an open action and host platform to a launched process.
///
/// Fire-and-forget: a launch returns once the process is started and its
/// outcome is never inspected. Only a failure to start is reported.
pub struct ActionDispatcher {
    table: PlatformCommandTable,
    launcher: Box<dyn Launcher>,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(PlatformCommandTable::default(), SystemLauncher)
    }
}

impl ActionDispatcher {
    /// Dispatcher over `table`, launching through `launcher`.
    pub fn new(table: PlatformCommandTable, launcher: impl Launcher + 'static) -> Self {
        Self {
            table,
            launcher: Box::new(launcher),
        }
    }

    /// Argv that `action` would launch for `bookmark` on `platform`.
    pub fn command_for(
        &self,
        action: OpenAction,
        bookmark: &Bookmark,
        platform: &Platform,
    ) -> LaunchCommand {
        if !self.table.is_known(platform) {
            debug!(platform = %platform, "Unrecognized platform, using fallback commands");
        }

        self.table
            .template(platform, action)
            .render(&bookmark.path)
    }

    /// Launch `action` for `bookmark`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LaunchFailed`] when the process cannot be started.
    #[track_caller]
    #[instrument(skip(self, bookmark), fields(bookmark_id = %bookmark.id, path = ?bookmark.path))]
    pub fn dispatch(
        &self,
        action: OpenAction,
        bookmark: &Bookmark,
        platform: &Platform,
    ) -> CoreResult<()> {
        let command = self.command_for(action, bookmark, platform);

        self.launcher
            .launch(&command)
            .map_err(|e| CoreError::LaunchFailed {
                program: command.program.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(program = %command.program, "Launched");

        Ok(())
    }

    /// Open the folder in the platform file manager.
    #[track_caller]
    pub fn open_in_file_manager(&self, bookmark: &Bookmark, platform: &Platform) -> CoreResult<()> {
        self.dispatch(OpenAction::FileManager, bookmark, platform)
    }

    /// Open the folder in the code editor.
    #[track_caller]
    pub fn open_in_editor(&self, bookmark: &Bookmark, platform: &Platform) -> CoreResult<()> {
        self.dispatch(OpenAction::Editor, bookmark, platform)
    }

    /// Open a terminal whose working directory is the folder.
    #[track_caller]
    pub fn open_in_terminal(&self, bookmark: &Bookmark, platform: &Platform) -> CoreResult<()> {
        self.dispatch(OpenAction::Terminal, bookmark, platform)
    }
}
