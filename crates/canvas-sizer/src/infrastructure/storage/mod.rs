//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module handles:
//!
//! - Locating the TOML configuration file in the platform-appropriate directory.
//! - Reading it, or an explicitly given path.
//! - Providing sensible defaults when the file does not exist (first run).

pub mod config;
