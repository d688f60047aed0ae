//! Domain entities for the canvas sizer.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from OS APIs, file systems, terminals or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the business rule is small but precise: how screen density and viewing
//! distance translate into a design canvas and its export scales.

/// Screen parameters supplied by the caller.
pub mod screen;

/// The canvas size calculation itself.
///
/// See [`calculator::compute`] for the main entry point.
pub mod calculator;

/// Proportional preview box geometry.
pub mod preview;
