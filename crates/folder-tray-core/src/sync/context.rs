//! Application context and menu synchronization.
//!
//! Every mutation runs load, modify, save, rebuild. The menu is never
//! patched in place: a rebuild reloads the list from the store and replaces
//! the whole descriptor. Handlers are expected to run one at a time on the
//! host's event loop, which is what makes the sequence atomic.

use crate::{
    ActionDispatcher, Bookmark, BookmarkList, BookmarkStore, CoreError, CoreResult, MenuAction,
    OpenAction, Platform, build_menu,
    sync::{FolderPicker, MenuSink},
};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Synchronizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Menu matches the stored list.
    Idle,
    /// A descriptor is being regenerated.
    Rebuilding,
}

/// What the host loop should do after a handled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

/// Everything a menu handler needs, created once at startup.
pub struct AppContext {
    store: BookmarkStore,
    picker: Box<dyn FolderPicker>,
    dispatcher: ActionDispatcher,
    menu: Box<dyn MenuSink>,
    platform: Platform,
    state: SyncState,
}

impl AppContext {
    /// Assemble a context. No menu is attached until [`rebuild`](Self::rebuild).
    pub fn new(
        store: BookmarkStore,
        picker: impl FolderPicker + 'static,
        dispatcher: ActionDispatcher,
        menu: impl MenuSink + 'static,
        platform: Platform,
    ) -> Self {
        Self {
            store,
            picker: Box::new(picker),
            dispatcher,
            menu: Box::new(menu),
            platform,
            state: SyncState::Idle,
        }
    }

    /// Current synchronizer state.
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Host platform used for dispatch.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Freshly loaded bookmark list.
    pub fn bookmarks(&self) -> CoreResult<BookmarkList> {
        self.store.load()
    }

    /// Reload the list, regenerate the menu and attach it.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::StoreCorrupt`]; the previously attached menu
    /// is left in place.
    #[instrument(skip(self))]
    pub fn rebuild(&mut self) -> CoreResult<()> {
        self.state = SyncState::Rebuilding;
        let result = self.load_and_attach();
        self.state = SyncState::Idle;
        result
    }

    fn load_and_attach(&mut self) -> CoreResult<()> {
        let bookmarks = self.store.load()?;
        let menu = build_menu(&bookmarks);
        self.menu.attach(menu)?;

        debug!(count = bookmarks.len(), "Menu rebuilt");

        Ok(())
    }

    /// Run the handler bound to a clicked menu item.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: MenuAction) -> CoreResult<Outcome> {
        match action {
            MenuAction::AddFolder => {
                self.add_folder()?;
            }
            MenuAction::Open { id, action } => self.open(id, action)?,
            MenuAction::Remove { id } => {
                self.remove(id)?;
            }
            MenuAction::Quit => {
                info!("Quit requested from tray menu");
                return Ok(Outcome::Quit);
            }
        }

        Ok(Outcome::Continue)
    }

    /// Prompt for a folder and append it. Cancelling changes nothing.
    pub fn add_folder(&mut self) -> CoreResult<Option<Bookmark>> {
        let Some(path) = self.picker.pick_folder() else {
            return Ok(None);
        };

        self.add_path(&path).map(Some)
    }

    /// Append a bookmark for `path`, persist and rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPath`] for an empty or relative path,
    /// before anything is loaded or written.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn add_path(&mut self, path: &Path) -> CoreResult<Bookmark> {
        if path.as_os_str().is_empty() || !path.is_absolute() {
            return Err(CoreError::InvalidPath {
                path: path.to_string_lossy().into_owned(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut bookmarks = self.store.load()?;
        let bookmark = Bookmark::from_path(path.to_string_lossy().into_owned());

        bookmarks.push(bookmark.clone());
        self.store.save(&bookmarks)?;

        info!(bookmark_id = %bookmark.id, name = %bookmark.name, "Folder added");

        self.rebuild()?;

        Ok(bookmark)
    }

    /// Delete the bookmark with `id`, persist and rebuild.
    ///
    /// An id that is no longer stored only triggers a rebuild.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: Uuid) -> CoreResult<Option<Bookmark>> {
        let mut bookmarks = self.store.load()?;

        let removed = bookmarks.remove_by_id(id);
        match &removed {
            Some(bookmark) => {
                self.store.save(&bookmarks)?;
                info!(bookmark_id = %id, name = %bookmark.name, "Folder removed");
            }
            None => warn!(bookmark_id = %id, "Remove requested for unknown bookmark"),
        }

        self.rebuild()?;

        Ok(removed)
    }

    /// Delete the bookmark currently at `index`.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<Option<Bookmark>> {
        let id = self.store.load()?.get(index).map(|b| b.id);

        match id {
            Some(id) => self.remove(id),
            None => Ok(None),
        }
    }

    /// Launch `action` for the bookmark with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BookmarkNotFound`] for an unknown id and
    /// [`CoreError::LaunchFailed`] when the process cannot be started.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn open(&self, id: Uuid, action: OpenAction) -> CoreResult<()> {
        let bookmarks = self.store.load()?;

        let bookmark = bookmarks.find(id).ok_or_else(|| CoreError::BookmarkNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.dispatcher.dispatch(action, bookmark, &self.platform)
    }
}
