//! Input/output operations: errors, configuration, export, and the CLI

/// Command-line interface and file plumbing
pub mod cli;
/// Layout constants and configuration defaults
pub mod config;
/// Error types and the crate-wide result alias
pub mod error;
/// PNG and CSV export adapters
pub mod export;
