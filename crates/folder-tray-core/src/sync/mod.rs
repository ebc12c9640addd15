mod collaborators;
mod context;

pub use {
    collaborators::{FolderPicker, MenuSink},
    context::{AppContext, Outcome, SyncState},
};
