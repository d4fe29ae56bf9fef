//! Trait abstraction for opening external links, enabling mocking in tests

use crate::platform::opener_command;
use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Opens a URL in a new browsing context
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens links with the platform's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        spawn_reaped(opener_command(url)).map(|_| ())
    }
}

/// Spawn `cmd` without blocking and wait for it on a background thread so
/// the exited child is reaped.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || {
        let status = child.wait();
        if let Ok(status) = &status {
            if !status.success() {
                tracing::warn!(%status, "link opener exited with failure");
            }
        }
        status
    }))
}
