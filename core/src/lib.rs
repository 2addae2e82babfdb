//! Root of the `folio-core` library.

// Prevent accidental direct writes to stdout/stderr in library code. The
// terminal belongs to the TUI; diagnostics go through the tracing stack.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod default_client;
pub mod gallery;
pub mod profile;
pub mod projects;
