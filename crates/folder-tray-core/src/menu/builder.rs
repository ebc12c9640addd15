use crate::{
    Bookmark, BookmarkList, MenuAction, OpenAction,
    menu::{MenuDescriptor, MenuEntry, MenuIcon, MenuItem, Submenu},
};

/// Label of the top entry.
pub const ADD_FOLDER_LABEL: &str = "Add new folder";
/// Label of the bottom entry.
pub const CLOSE_APP_LABEL: &str = "Close app";
/// Label of the per-bookmark remove entry.
pub const REMOVE_FOLDER_LABEL: &str = "Remove folder";

/// Build the full tray menu for `bookmarks`.
///
/// Layout: add entry, separator, one submenu per bookmark, separator, close
/// entry.
pub fn build_menu(bookmarks: &BookmarkList) -> MenuDescriptor {
    let mut entries = Vec::with_capacity(bookmarks.len() + 4);

    entries.push(MenuEntry::Item(MenuItem::new(
        ADD_FOLDER_LABEL,
        MenuIcon::Add,
        MenuAction::AddFolder,
    )));
    entries.push(MenuEntry::Separator);

    entries.extend(bookmarks.iter().map(bookmark_submenu));

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Item(MenuItem::new(
        CLOSE_APP_LABEL,
        MenuIcon::Close,
        MenuAction::Quit,
    )));

    MenuDescriptor { entries }
}

fn bookmark_submenu(bookmark: &Bookmark) -> MenuEntry {
    let mut entries: Vec<MenuEntry> = OpenAction::ALL
        .iter()
        .map(|&action| {
            MenuEntry::Item(MenuItem::new(
                open_label(action),
                open_icon(action),
                MenuAction::Open {
                    id: bookmark.id,
                    action,
                },
            ))
        })
        .collect();

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Item(MenuItem::new(
        REMOVE_FOLDER_LABEL,
        MenuIcon::Remove,
        MenuAction::Remove { id: bookmark.id },
    )));

    MenuEntry::Submenu(Submenu {
        label: bookmark.name.clone(),
        entries,
    })
}

fn open_label(action: OpenAction) -> &'static str {
    match action {
        OpenAction::FileManager => "Open Folder",
        OpenAction::Editor => "Open in Code",
        OpenAction::Terminal => "Open in Terminal",
    }
}

fn open_icon(action: OpenAction) -> MenuIcon {
    match action {
        OpenAction::FileManager => MenuIcon::Folder,
        OpenAction::Editor => MenuIcon::Code,
        OpenAction::Terminal => MenuIcon::Terminal,
    }
}
