//! Application layer use cases for the canvas sizer.
//!
//! # Sub-modules
//!
//! - **`validate_form`** – Checks raw form values (as typed by the user) and
//!   builds a [`canvas_sizer_core::ScreenInput`].  Owns every user-facing
//!   error message.
//!
//! - **`locale`** – Static label tables for the supported display languages.
//!
//! - **`calculate`** – Runs validation then the core calculation and tells
//!   the front end whether to show a result, field errors or a prompt.
//!
//! - **`present`** – Formats a [`canvas_sizer_core::DesignResult`] for
//!   display.  It formats only; all numbers come from the core.

pub mod calculate;
pub mod locale;
pub mod present;
pub mod validate_form;
