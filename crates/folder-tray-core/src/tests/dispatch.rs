use crate::{
    ActionDispatcher, Bookmark, CoreError, OpenAction, Platform, PlatformCommandTable,
    tests::support::RecordingLauncher,
};

#[cfg(unix)]
use crate::{LaunchCommand, Launcher, SystemLauncher};

#[cfg(unix)]
use std::{
    io,
    time::{Duration, Instant},
};

#[cfg(unix)]
const MISSING_PROGRAM: &str = "folder-tray-no-such-program";

fn dispatcher(launcher: &RecordingLauncher) -> ActionDispatcher {
    ActionDispatcher::new(PlatformCommandTable::default(), launcher.clone())
}

/// WHAT: Shell metacharacters in a path stay one literal argument
/// WHY: Folder names must never be able to inject commands
#[test]
#[allow(clippy::unwrap_used)]
fn given_path_with_shell_metacharacters_when_opening_then_single_literal_argument() {
    // Given: A bookmark whose path looks like a shell command
    let launcher = RecordingLauncher::default();
    let dispatcher = dispatcher(&launcher);
    let bookmark = Bookmark::from_path("/tmp/x; rm -rf /");

    // When: Opening it in the file manager
    dispatcher
        .open_in_file_manager(&bookmark, &Platform::Linux)
        .unwrap();

    // Then: The program is the file manager and the path is one argv element
    let launched = launcher.launched.borrow();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].program, "xdg-open");
    assert_eq!(launched[0].args, vec!["/tmp/x; rm -rf /".to_string()]);
}

/// WHAT: Editor launch uses the code launcher
/// WHY: The editor command is the same across Unix platforms
#[test]
#[allow(clippy::unwrap_used)]
fn given_bookmark_when_opening_in_editor_then_code_launched_with_path() {
    // Given: A dispatcher and a bookmark
    let launcher = RecordingLauncher::default();
    let dispatcher = dispatcher(&launcher);
    let bookmark = Bookmark::from_path("/home/u/proj");

    // When: Opening in the editor on macOS
    dispatcher
        .open_in_editor(&bookmark, &Platform::Darwin)
        .unwrap();

    // Then: `code <path>` is launched
    let launched = launcher.launched.borrow();
    assert_eq!(launched[0].program, "code");
    assert_eq!(launched[0].args, vec!["/home/u/proj".to_string()]);
}

/// WHAT: Every open action on an unknown platform uses the Linux command
/// WHY: Unrecognized platforms recover through the fallback row
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_platform_when_dispatching_each_action_then_linux_commands_launched() {
    // Given: A dispatcher and an unlisted platform
    let launcher = RecordingLauncher::default();
    let dispatcher = dispatcher(&launcher);
    let bookmark = Bookmark::from_path("/srv");
    let platform = Platform::Other("solaris".to_string());

    // When: Dispatching all three actions
    for action in OpenAction::ALL {
        dispatcher.dispatch(action, &bookmark, &platform).unwrap();
    }

    // Then: The Linux programs were used
    let programs: Vec<String> = launcher
        .launched
        .borrow()
        .iter()
        .map(|c| c.program.clone())
        .collect();
    assert_eq!(programs, vec!["xdg-open", "code", "gnome-terminal"]);
}

/// WHAT: A failed spawn is reported as LaunchFailed
/// WHY: The host can surface missing tools without changing dispatch
#[test]
fn given_failing_launcher_when_opening_terminal_then_launch_failed_error() {
    // Given: A launcher that cannot start anything
    let launcher = RecordingLauncher {
        fail: true,
        ..Default::default()
    };
    let dispatcher = dispatcher(&launcher);
    let bookmark = Bookmark::from_path("/srv");

    // When: Opening a terminal
    let result = dispatcher.open_in_terminal(&bookmark, &Platform::Linux);

    // Then: The failure names the program
    assert!(matches!(
        result,
        Err(CoreError::LaunchFailed { ref program, .. }) if program == "gnome-terminal"
    ));
}

/// WHAT: Spawning a program that is not installed fails with NotFound
/// WHY: This is the real OS spawn path behind every menu launch
#[cfg(unix)]
#[test]
fn given_missing_program_when_system_launcher_spawns_then_not_found() {
    // Given: A command naming a program that does not exist
    let command = LaunchCommand {
        program: MISSING_PROGRAM.to_string(),
        args: vec!["/tmp".to_string()],
    };

    // When: Launching it with the system launcher
    let result = SystemLauncher.launch(&command);

    // Then: The spawn error is reported as NotFound
    assert!(matches!(result, Err(ref e) if e.kind() == io::ErrorKind::NotFound));
}

/// WHAT: A missing editor surfaces as LaunchFailed through the dispatcher
/// WHY: The host decides how to report failures from this variant
#[cfg(unix)]
#[test]
fn given_missing_editor_when_dispatching_with_system_launcher_then_launch_failed() {
    // Given: A real launcher and an editor override that is not installed
    let dispatcher = ActionDispatcher::new(
        PlatformCommandTable::default().with_editor_program(MISSING_PROGRAM),
        SystemLauncher,
    );
    let bookmark = Bookmark::from_path("/tmp");

    // When: Opening the bookmark in the editor
    let result = dispatcher.open_in_editor(&bookmark, &Platform::Linux);

    // Then: The error names the program and keeps the OS error
    assert!(matches!(
        result,
        Err(CoreError::LaunchFailed { ref program, ref source, .. })
            if program == MISSING_PROGRAM && source.kind() == io::ErrorKind::NotFound
    ));
}

/// WHAT: Launching returns while the child is still running
/// WHY: Menu handlers run on the event loop and must never wait on a child
#[cfg(unix)]
#[test]
#[allow(clippy::unwrap_used)]
fn given_long_running_program_when_system_launcher_spawns_then_returns_immediately() {
    // Given: A program that runs for several seconds
    let command = LaunchCommand {
        program: "sleep".to_string(),
        args: vec!["5".to_string()],
    };

    // When: Launching it
    let started = Instant::now();
    SystemLauncher.launch(&command).unwrap();

    // Then: The call returned well before the child could exit
    assert!(started.elapsed() < Duration::from_secs(2));
}

/// WHAT: A program that exits at once launches cleanly
/// WHY: Exit status is discarded and never turned into an error
#[cfg(unix)]
#[test]
#[allow(clippy::unwrap_used)]
fn given_true_when_system_launcher_spawns_then_ok() {
    // Given: The `true` utility
    let command = LaunchCommand {
        program: "true".to_string(),
        args: Vec::new(),
    };

    // When/Then: Launching succeeds
    SystemLauncher.launch(&command).unwrap();
}
