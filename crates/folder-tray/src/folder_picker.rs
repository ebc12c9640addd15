use folder_tray_core::FolderPicker;

use std::path::PathBuf;

use tracing::instrument;

const DIALOG_TITLE: &str = "Add new folder";

/// Native directory chooser. Blocks the calling thread until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdFolderPicker;

impl FolderPicker for RfdFolderPicker {
    #[instrument(skip(self))]
    fn pick_folder(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(DIALOG_TITLE).pick_folder()
    }
}
