mod action;
mod builder;
mod descriptor;

pub use {
    action::MenuAction,
    builder::{ADD_FOLDER_LABEL, CLOSE_APP_LABEL, REMOVE_FOLDER_LABEL, build_menu},
    descriptor::{MenuDescriptor, MenuEntry, MenuIcon, MenuItem, Submenu},
};
