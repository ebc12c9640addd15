use crate::LaunchCommand;

use std::{
    io,
    process::{Command, Stdio},
    thread,
};

use tracing::{trace, warn};

/// Starts external processes.
pub trait Launcher {
    /// Start `command` and return as soon as the process exists.
    ///
    /// Must not wait for the process to finish.
    fn launch(&self, command: &LaunchCommand) -> io::Result<()>;
}

/// Spawns real OS processes with argv arrays.
///
/// Each child is handed to a detached reaper thread which waits on it and
/// drops the exit status, so no zombie is left behind on Unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<()> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // The child is already running; a missing reaper only leaves it unreaped.
        let program = command.program.clone();
        let reaper = thread::Builder::new()
            .name("launch-reaper".to_string())
            .spawn(move || {
                let _ = child.wait();
                trace!(program = %program, "Launched process exited");
            });

        if let Err(e) = reaper {
            warn!(program = %command.program, error = %e, "Failed to start reaper thread");
        }

        Ok(())
    }
}
