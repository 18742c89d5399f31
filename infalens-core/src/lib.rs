//! # infalens-core
//!
//! Shared foundation for the infalens workspace.
//! Provides the error taxonomy, layered configuration, the record and
//! kind types shared by extraction and reporting, and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
