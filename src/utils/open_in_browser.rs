use crate::Error;
use log::info;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens `target` (a URL or `file://` location) with the platform's default viewer.
pub fn open_in_browser(target: &str) -> Result<(), Error> {
    info!("Opening {}...", target);

    let mut cmd = opener_command(target);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = cmd.status().map_err(|e| {
        Error::ViewerError(format!("Failed to launch viewer for {}: {}", target, e))
    })?;

    if !status.success() {
        return Err(Error::ViewerError(format!(
            "Viewer for {} exited with {}",
            target, status
        )));
    }

    Ok(())
}

/// Builds an absolute `file://` URL for an existing file.
pub fn file_url(path: &Path) -> Result<String, Error> {
    let absolute_path = path.canonicalize()?;

    Ok(format!("file://{}", absolute_path.display()))
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", target]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
