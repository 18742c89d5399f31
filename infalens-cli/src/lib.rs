//! # infalens-cli
//!
//! Command-line surface: argument parsing, command execution, and the
//! mapping from error codes to process exit statuses.

pub mod commands;
