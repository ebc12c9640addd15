#[allow(clippy::module_inception)]
mod bookmark;
mod list;

pub use {
    bookmark::{Bookmark, display_name},
    list::BookmarkList,
};
