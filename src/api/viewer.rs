use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// Opens `path` in the platform's default viewer.
///
/// Best effort: a missing helper binary or spawn failure is logged and
/// never propagated.
pub(crate) fn open_in_viewer(path: &Path) {
    match open_command(path).spawn() {
        Ok(_) => debug!(path = %path.display(), "opened plot in system viewer"),
        Err(err) => warn!(
            path = %path.display(),
            error = %err,
            "failed to open plot in system viewer"
        ),
    }
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
