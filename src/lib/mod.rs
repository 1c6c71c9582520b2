//! Shared helpers used by the extension and the terminal host.

pub mod errors;
pub mod paths;
pub mod shell;
pub mod telemetry;
