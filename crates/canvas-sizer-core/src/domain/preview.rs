//! Preview box geometry.
//!
//! Front ends draw the recommended canvas as a small proportional rectangle.
//! The box is fitted into a fixed width; very tall canvases are clamped to a
//! height of three quarters of that width so a portrait phone does not produce
//! a towering preview.

/// Default width of the preview box, in display units.
pub const PREVIEW_MAX_WIDTH: f64 = 320.0;

/// Maximum preview height as a fraction of the maximum width.
const MAX_HEIGHT_RATIO: f64 = 0.75;

/// Upper bound on the dimension label font size.
const MAX_LABEL_FONT_SIZE: f64 = 12.0;

/// A proportional rectangle standing in for the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewBox {
    pub width: f64,
    pub height: f64,
    /// Font size for the width/height annotations drawn beside the box.
    pub label_font_size: f64,
}

/// Fits a `canvas_width` × `canvas_height` canvas into a box at most
/// `max_width` wide and `0.75 * max_width` tall.
///
/// Returns `None` when either canvas dimension is zero or `max_width` is not
/// positive and finite; front ends show a "no preview yet" placeholder in that case.
pub fn preview_box(canvas_width: u32, canvas_height: u32, max_width: f64) -> Option<PreviewBox> {
    let width_ok = max_width.is_finite() && max_width > 0.0;
    if canvas_width == 0 || canvas_height == 0 || !width_ok {
        return None;
    }

    let aspect = f64::from(canvas_width) / f64::from(canvas_height);
    let max_height = max_width * MAX_HEIGHT_RATIO;

    let mut width = max_width;
    let mut height = max_width / aspect;
    if height > max_height {
        height = max_height;
        width = height * aspect;
    }

    let label_font_size = MAX_LABEL_FONT_SIZE.min(width / 20.0).min(height / 15.0);

    Some(PreviewBox {
        width,
        height,
        label_font_size,
    })
}
