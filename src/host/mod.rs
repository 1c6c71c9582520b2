//! Host-provided UI capabilities.
use std::future::Future;

pub mod terminal;

pub use terminal::TerminalHost;

/// Notification and progress surface supplied by whichever host runs the extension.
///
/// Every call is fire-and-forget; nothing returned by the host is consumed.
pub trait HostUi {
    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);

    /// Show a non-cancellable progress indicator for as long as `op` runs.
    fn with_progress<F>(&self, title: &str, op: F) -> impl Future<Output = F::Output>
    where
        F: Future;
}
