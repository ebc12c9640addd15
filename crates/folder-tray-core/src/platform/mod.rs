mod command_table;
#[allow(clippy::module_inception)]
mod platform;

pub use {
    command_table::{
        ArgTemplate, CommandTemplate, LaunchCommand, PlatformCommandTable, PlatformCommands,
    },
    platform::Platform,
};
