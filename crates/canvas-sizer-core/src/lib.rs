//! # canvas-sizer-core
//!
//! Shared library for the canvas sizer containing the screen input types and
//! the canvas size calculation.
//!
//! This crate is used by the command-line front end and by anything else that
//! wants the numbers without the presentation.  It has zero dependencies on
//! OS APIs, UI frameworks, file systems or network sockets.
//!
//! # Architecture overview (for beginners)
//!
//! A designer facing an unfamiliar device (a TV, a kiosk, a car dashboard)
//! needs to know how large the design canvas should be.  The answer depends on
//! how dense the screen is (its PPI) and how far away people sit from it: a TV
//! viewed from across the room can use much bigger "logical pixels" than a
//! phone held in the hand.
//!
//! This crate (`canvas-sizer-core`) defines:
//!
//! - **`domain::screen`** – The caller-supplied [`ScreenInput`] and the two
//!   closed option sets, [`ViewingDistance`] and [`PreferredCanvasWidth`].
//!
//! - **`domain::calculator`** – The pure [`compute`] function turning a
//!   [`ScreenInput`] into a [`DesignResult`] (PPI, scaling factor, canvas
//!   size, asset export scale, suggested font size).
//!
//! - **`domain::preview`** – Geometry for drawing a proportional preview box
//!   of the recommended canvas.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `canvas_sizer_core::compute` instead of `canvas_sizer_core::domain::calculator::compute`.
pub use domain::calculator::{compute, CalculatorError, DesignResult, BASE_FONT_SIZE};
pub use domain::preview::{preview_box, PreviewBox, PREVIEW_MAX_WIDTH};
pub use domain::screen::{ParseOptionError, PreferredCanvasWidth, ScreenInput, ViewingDistance};
