//! Shared plumbing for the catalog maintenance binaries.
//!
//! Each binary parses its own arguments and hands them to the matching
//! function in [`commands`]; output routing and logging setup live here so
//! both tools behave the same way.

pub mod commands;
pub mod console;
pub mod logging;

pub use console::{ConsoleReporter, OutputArgs, OutputFormat, QuietLevel};
