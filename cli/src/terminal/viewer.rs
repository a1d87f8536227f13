//! Hands the written map to the desktop's default image viewer.

use std::path::Path;

use anyhow::Context;
use tokio::process::Command;

#[cfg(windows)]
const VIEWER: &str = "cmd";
#[cfg(target_os = "macos")]
const VIEWER: &str = "open";
#[cfg(not(any(windows, target_os = "macos")))]
const VIEWER: &str = "xdg-open";

fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new(VIEWER);
    if cfg!(windows) {
        cmd.args(["/C", "start", ""]);
    }
    cmd.arg(path);
    cmd
}

/// Waits for the launcher, not for the viewer window to close.
pub async fn open(path: &Path) -> anyhow::Result<()> {
    let status = viewer_command(path)
        .status()
        .await
        .with_context(|| format!("failed to run {VIEWER}"))?;
    anyhow::ensure!(status.success(), "{VIEWER} exited with {status}");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
