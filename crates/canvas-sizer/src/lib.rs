//! canvas-sizer library crate.
//!
//! Wraps the pure calculation in `canvas-sizer-core` with everything a person
//! at a terminal needs: turning typed text into validated input, localized
//! result formatting, and a TOML file for default values.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Terminal (arguments in, text or JSON out)
//!         ↕
//! [canvas-sizer]
//!   ├── application/
//!   │     ├── validate_form/  raw text → ScreenInput, localized field errors
//!   │     ├── locale/         zh / en label tables
//!   │     ├── calculate/      validate → compute → outcome
//!   │     └── present/        DesignResult → labelled lines + preview box
//!   └── infrastructure/
//!         └── storage/config/ TOML defaults file
//!         ↕
//! [canvas-sizer-core]  compute()
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `canvas-sizer-core` only (no file system).
//! - `infrastructure` may touch the file system.

/// Application layer: validation and presentation.
pub mod application;

/// Infrastructure layer: configuration file.
pub mod infrastructure;
