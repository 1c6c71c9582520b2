//! Terminal rendition of the host UI used by the `open-unity` binary.
use std::{
    future::Future,
    io::{self, Write},
    time::Instant,
};

use tracing::debug;

use super::HostUi;

/// Errors and progress go to stderr, informational messages to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost {
    quiet: bool,
}

impl TerminalHost {
    /// `quiet` suppresses informational and progress output; errors are always shown.
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl HostUi for TerminalHost {
    fn show_error(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{message}");
    }

    fn show_info(&self, message: &str) {
        if !self.quiet {
            let _ = writeln!(io::stdout().lock(), "{message}");
        }
    }

    fn with_progress<F>(&self, title: &str, op: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        async move {
            if !self.quiet {
                let _ = writeln!(io::stderr().lock(), "{title}");
            }
            let started_at = Instant::now();
            let output = op.await;
            debug!(
                target: "open_unity::host",
                title,
                elapsed_ms = started_at.elapsed().as_millis(),
                "Progress finished"
            );
            output
        }
    }
}
