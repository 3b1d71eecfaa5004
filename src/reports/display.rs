// ABOUTME: Opens saved chart images in the platform image viewer when display is enabled
// ABOUTME: A viewer that fails to launch is logged and never aborts the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DisplayMode;
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Shows charts according to a [`DisplayMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartViewer {
    mode: DisplayMode,
}

impl ChartViewer {
    /// Viewer honouring `mode`
    #[must_use]
    pub const fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    /// Whether charts will actually be opened in this process
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self.mode {
            DisplayMode::Off => false,
            DisplayMode::On => true,
            DisplayMode::Auto => graphical_session_detected(),
        }
    }

    /// Open `path` and wait for the launcher to return
    pub fn show(&self, path: &Path) {
        if !self.is_enabled() {
            debug!(path = %path.display(), mode = %self.mode, "Display disabled, skipping viewer");
            return;
        }

        match viewer_command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => {
                info!(path = %path.display(), "Opened chart in viewer");
            }
            Ok(status) => {
                warn!(path = %path.display(), %status, "Image viewer exited unsuccessfully");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not launch image viewer");
            }
        }
    }
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

fn graphical_session_detected() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_is_never_enabled() {
        let viewer = ChartViewer::new(DisplayMode::Off);
        assert!(!viewer.is_enabled());
        // Must return without spawning anything
        viewer.show(Path::new("does-not-exist.png"));
    }

    #[test]
    fn test_on_is_always_enabled() {
        assert!(ChartViewer::new(DisplayMode::On).is_enabled());
    }
}
