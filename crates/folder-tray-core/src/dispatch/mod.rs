mod dispatcher;
mod launcher;
mod open_action;

pub use {
    dispatcher::ActionDispatcher,
    launcher::{Launcher, SystemLauncher},
    open_action::OpenAction,
};
