//! Canvas size calculation.
//!
//! [`compute`] is a pure function: it derives the screen density, the
//! device's scaling factor at the given viewing distance and, from those, the
//! canvas a designer should draw on.  It keeps no state between calls.
//!
//! # The numbers (for beginners)
//!
//! ```text
//! ppi                    = √(width² + height²) / diagonal
//! screen_scaling_factor  = max(1, round(ppi / divisor(viewing_distance)))
//! actual_multiplier      = min(preferred_multiplier, screen_scaling_factor)
//! canvas                 = round(pixels / screen_scaling_factor × actual_multiplier)
//! asset_export_scale     = round(screen_scaling_factor / actual_multiplier, 1 dp)
//! suggested_font_size    = 12 × actual_multiplier
//! ```
//!
//! The `min` in the third line is the rule that matters: a designer used to a
//! 3x canvas gains nothing from it on a device that only scales by 1x, so the
//! design multiplier is capped at what the device actually does.
//!
//! # Rounding
//!
//! Every rounded operand is positive, so [`f64::round`] (half away from zero)
//! gives the same result as rounding half up.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::screen::ScreenInput;

/// Minimum legible font size on a 1x canvas, in canvas pixels.
pub const BASE_FONT_SIZE: u32 = 12;

/// The single error the calculator can report.
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    /// Width or height is zero, or the diagonal is not a positive finite number.
    ///
    /// This is an expected outcome while a form is still being filled in;
    /// callers should show a prompt rather than an error.
    #[error("invalid screen geometry: {pixel_width}x{pixel_height} px, {diagonal_size} in")]
    InvalidScreenGeometry {
        pixel_width: u32,
        pixel_height: u32,
        diagonal_size: f64,
    },
}

/// Design parameters derived from one [`ScreenInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResult {
    /// Pixels per inch, rounded to 2 decimal places.
    pub ppi: f64,
    /// Device pixels per logical pixel at the given viewing distance.  Always ≥ 1.
    pub screen_scaling_factor: u32,
    /// The design multiplier actually usable on this device.
    pub actual_design_multiplier: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Scale at which bitmap assets are exported, rounded to 1 decimal place.
    ///
    /// Not snapped to 1 / 1.5 / 2: a 4x device designed at 3x yields 1.3.
    pub asset_export_scale: f64,
    /// Minimum legible font size in canvas pixels.
    pub suggested_font_size: u32,
    /// `actual_design_multiplier` restated for display, e.g. `"2倍"`.
    pub font_export_scale_text: String,
}

/// Computes the recommended canvas for `input`.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidScreenGeometry`] when `pixel_width` or
/// `pixel_height` is zero, when `diagonal_size` is zero, negative, NaN or
/// infinite, or when the diagonal is so small that the pixel density or the
/// scaling factor cannot be represented.  No partial result is produced.
pub fn compute(input: &ScreenInput) -> Result<DesignResult, CalculatorError> {
    let ScreenInput {
        pixel_width,
        pixel_height,
        diagonal_size,
        viewing_distance,
        preferred_canvas_width,
    } = *input;

    let reject = || {
        trace!(pixel_width, pixel_height, diagonal_size, "rejecting screen geometry");
        CalculatorError::InvalidScreenGeometry {
            pixel_width,
            pixel_height,
            diagonal_size,
        }
    };

    let diagonal_ok = diagonal_size.is_finite() && diagonal_size > 0.0;
    if pixel_width == 0 || pixel_height == 0 || !diagonal_ok {
        return Err(reject());
    }

    let width = f64::from(pixel_width);
    let height = f64::from(pixel_height);

    let diagonal_pixels = (width * width + height * height).sqrt();
    let ppi = diagonal_pixels / diagonal_size;

    let divisor = viewing_distance.divisor();
    let scale = (ppi / divisor).round().max(1.0);
    // A vanishingly small diagonal overflows ppi or the u32 factor.
    if !ppi.is_finite() || scale > f64::from(u32::MAX) {
        return Err(reject());
    }
    let screen_scaling_factor = scale as u32;

    let preferred_design_multiplier = preferred_canvas_width.multiplier();
    let actual_design_multiplier = preferred_design_multiplier.min(screen_scaling_factor);

    let factor = f64::from(screen_scaling_factor);
    let multiplier = f64::from(actual_design_multiplier);

    // Divide first, then multiply: the order is part of the rounding contract.
    let canvas_width = (width / factor * multiplier).round() as u32;
    let canvas_height = (height / factor * multiplier).round() as u32;

    let asset_export_scale = ((factor / multiplier) * 10.0).round() / 10.0;

    let suggested_font_size = BASE_FONT_SIZE * actual_design_multiplier;

    let result = DesignResult {
        ppi: round_to(ppi, 2),
        screen_scaling_factor,
        actual_design_multiplier,
        canvas_width,
        canvas_height,
        asset_export_scale,
        suggested_font_size,
        font_export_scale_text: format!("{actual_design_multiplier}倍"),
    };

    debug!(
        ppi = result.ppi,
        screen_scaling_factor,
        actual_design_multiplier,
        canvas_width,
        canvas_height,
        "computed design parameters"
    );

    Ok(result)
}

/// Rounds `value` to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// ── Tests ─────────────────────────────────────────────────────────────────────
