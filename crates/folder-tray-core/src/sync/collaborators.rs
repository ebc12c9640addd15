use crate::{CoreResult, MenuDescriptor};

use std::path::PathBuf;

/// Single-directory selection dialog.
pub trait FolderPicker {
    /// Ask the user for a folder. `None` means the dialog was cancelled.
    fn pick_folder(&mut self) -> Option<PathBuf>;
}

/// Tray host that displays menu descriptors.
pub trait MenuSink {
    /// Replace whatever menu is currently shown with `menu`.
    fn attach(&mut self, menu: MenuDescriptor) -> CoreResult<()>;
}
