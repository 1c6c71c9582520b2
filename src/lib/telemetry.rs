//! Telemetry initialization and command invocation span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Notifications own stdout/stderr for the user, so the default filter only lets warnings through.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one command invocation.
pub struct InvocationSpan {
    span: Span,
    started_at: Instant,
    command_id: &'static str,
}

impl InvocationSpan {
    /// Start an invocation span.
    pub fn start(command_id: &'static str) -> Self {
        let span = info_span!(target: "open_unity::command", "invocation", command_id);
        Self {
            span,
            started_at: Instant::now(),
            command_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "open_unity::command",
            command_id = self.command_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed command invocation"
        );
    }
}
