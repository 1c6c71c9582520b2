//! Library crate root re-exporting the extension, host and settings modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod extension;
pub mod host;
pub mod settings;
