//! Folder-tray Core Library
//!
//! Folder bookmark registry, per-platform launch commands and the tray menu
//! synchronizer. GUI hosts plug in through [`FolderPicker`] and [`MenuSink`].
//!
//! # Example
//!
//! ```no_run
//! use folder_tray_core::{
//!     ActionDispatcher, AppContext, BookmarkStore, CoreResult, FolderPicker, JsonFileStore,
//!     MenuDescriptor, MenuSink, Platform,
//! };
//!
//! use std::path::PathBuf;
//!
//! struct NoPicker;
//!
//! impl FolderPicker for NoPicker {
//!     fn pick_folder(&mut self) -> Option<PathBuf> {
//!         None
//!     }
//! }
//!
//! struct PrintMenu;
//!
//! impl MenuSink for PrintMenu {
//!     fn attach(&mut self, menu: MenuDescriptor) -> CoreResult<()> {
//!         println!("{:#?}", menu);
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let store = BookmarkStore::new(JsonFileStore::new("store.json"));
//!     let mut ctx = AppContext::new(
//!         store,
//!         NoPicker,
//!         ActionDispatcher::default(),
//!         PrintMenu,
//!         Platform::current(),
//!     );
//!
//!     ctx.add_path(&PathBuf::from("/home/u/proj"))?;
//!     Ok(())
//! }
//! ```

mod bookmark;
mod dispatch;
mod error;
mod menu;
mod platform;
mod store;
mod sync;

pub use {
    bookmark::{Bookmark, BookmarkList, display_name},
    dispatch::{ActionDispatcher, Launcher, OpenAction, SystemLauncher},
    error::{CoreError, Result as CoreResult},
    menu::{
        ADD_FOLDER_LABEL, CLOSE_APP_LABEL, MenuAction, MenuDescriptor, MenuEntry, MenuIcon,
        MenuItem, REMOVE_FOLDER_LABEL, Submenu, build_menu,
    },
    platform::{
        ArgTemplate, CommandTemplate, LaunchCommand, Platform, PlatformCommandTable,
        PlatformCommands,
    },
    store::{BookmarkStore, FOLDERS_KEY, JsonFileStore, KeyValueStore, MemoryStore},
    sync::{AppContext, FolderPicker, MenuSink, Outcome, SyncState},
};

#[cfg(test)]
mod tests;
