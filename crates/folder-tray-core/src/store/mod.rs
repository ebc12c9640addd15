mod bookmark_store;
mod json_file;
mod key_value;

pub use {
    bookmark_store::{BookmarkStore, FOLDERS_KEY},
    json_file::JsonFileStore,
    key_value::{KeyValueStore, MemoryStore},
};
