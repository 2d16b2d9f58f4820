//! Hand the written image to the platform's default viewer.

use std::io;
use std::path::Path;
use std::process::Command;

/// The platform opener invocation for `path`.
fn viewer_command(path: &Path) -> io::Result<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        Ok(cmd)
    }
    #[cfg(target_os = "linux")]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        Ok(cmd)
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        Ok(cmd)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = path;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no image viewer known for this platform",
        ))
    }
}

/// Spawn the platform opener for `path` without waiting for it.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let child = viewer_command(path)?.spawn()?;
    // The viewer outlives this process; it is never waited on.
    drop(child);
    Ok(())
}

/// Show the image if a viewer is available. A missing viewer is not an error.
pub fn show(path: &Path) {
    match open_in_viewer(path) {
        Ok(()) => tracing::info!(path = %path.display(), "opened path diagram"),
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "could not open image viewer, diagram left on disk"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_opens_with_xdg_open() {
        let cmd = viewer_command(Path::new("out/diagram.png")).unwrap();
        assert_eq!(cmd.get_program(), "xdg-open");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![Path::new("out/diagram.png").as_os_str()]);
    }
}
