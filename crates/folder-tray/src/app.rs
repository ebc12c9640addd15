use crate::{AppResult, Notifier, config::Config};

use std::str::FromStr;

use folder_tray_core::{AppContext, CoreError, MenuAction, Outcome};
use tracing::{debug, error, info, instrument, warn};

/// Main application state.
///
/// Lives on the event loop thread, together with the tray it drives.
pub struct App {
    pub(crate) ctx: AppContext,
    pub(crate) notifier: Box<dyn Notifier>,
    pub(crate) notify_on_launch_failure: bool,
}

impl App {
    /// Wrap a context with the configured error reporting.
    pub fn new(ctx: AppContext, notifier: impl Notifier + 'static, config: &Config) -> Self {
        Self {
            ctx,
            notifier: Box::new(notifier),
            notify_on_launch_failure: config.behavior.notify_on_launch_failure,
        }
    }

    /// Build and attach the initial menu.
    ///
    /// A corrupt bookmark store is fatal at this point. The user is notified
    /// before the error is returned, since a tray app has no console.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> AppResult<()> {
        if let Err(e) = self.ctx.rebuild() {
            error!(error = %e, "Failed to build initial tray menu");
            self.notifier
                .notify("Folder bookmarks could not be loaded", &e.to_string());
            return Err(e.into());
        }
        info!(platform = %self.ctx.platform(), "Folder Tray started");
        Ok(())
    }

    /// Route a clicked menu item id to its handler.
    #[instrument(skip(self))]
    pub fn handle_menu_event(&mut self, menu_id: &str) -> Outcome {
        let action = match MenuAction::from_str(menu_id) {
            Ok(action) => action,
            Err(reason) => {
                debug!(reason = %reason, "Ignoring menu event");
                return Outcome::Continue;
            }
        };

        match self.ctx.handle(action) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report(e);
                Outcome::Continue
            }
        }
    }

    fn report(&self, error: CoreError) {
        match &error {
            CoreError::LaunchFailed { program, .. } => {
                warn!(error = %error, "Failed to open folder");
                if self.notify_on_launch_failure {
                    self.notifier.notify(
                        "Could not open folder",
                        &format!("'{}' could not be started.", program),
                    );
                }
            }
            CoreError::BookmarkNotFound { .. } => {
                warn!(error = %error, "Menu entry refers to a removed folder");
            }
            CoreError::StoreCorrupt { .. } => {
                error!(error = %error, "Bookmark store is corrupt");
                self.notifier
                    .notify("Folder bookmarks could not be loaded", &error.to_string());
            }
            CoreError::InvalidPath { path, .. } => {
                warn!(error = %error, "Rejected folder path");
                self.notifier.notify(
                    "Folder could not be added",
                    &format!("'{}' is not an absolute folder path.", path),
                );
            }
            CoreError::Io { .. } | CoreError::Serialize { .. } => {
                error!(error = %error, "Bookmark store access failed");
                self.notifier
                    .notify("Folder bookmarks could not be updated", &error.to_string());
            }
            CoreError::MenuAttachFailed { .. } => {
                error!(error = %error, "Failed to refresh tray menu");
                self.notifier
                    .notify("Tray menu could not be updated", &error.to_string());
            }
        }
    }
}
