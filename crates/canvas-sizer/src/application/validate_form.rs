//! Form validation: raw text in, [`ScreenInput`] out.
//!
//! The calculator assumes it receives sane values.  This module is where user
//! typing is checked, and it owns every message the user sees about bad
//! input.  Rules per field:
//!
//! | Field                  | Rule                                   |
//! |------------------------|----------------------------------------|
//! | pixel width / height   | a number, greater than 0, an integer   |
//! | diagonal size          | a number, greater than 0               |
//! | viewing distance       | one of `close`, `medium`, `far`        |
//! | preferred canvas width | one of `375`, `750`, `1125`            |
//!
//! Every field is checked, so a form with several mistakes reports all of
//! them at once.  Each field reports only its first failing rule.

use std::fmt;

use canvas_sizer_core::{PreferredCanvasWidth, ScreenInput, ViewingDistance};
use thiserror::Error;

use super::locale::{Labels, Language};

/// Raw, unvalidated form values as typed by the user.
///
/// `None` means the field was left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub pixel_width: Option<String>,
    pub pixel_height: Option<String>,
    pub diagonal_size: Option<String>,
    pub viewing_distance: Option<String>,
    pub preferred_canvas_width: Option<String>,
}

/// Identifies a form field in an error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PixelWidth,
    PixelHeight,
    DiagonalSize,
    ViewingDistance,
    PreferredCanvasWidth,
}

impl FormField {
    /// Name of the command-line flag that sets this field.
    pub fn flag(self) -> &'static str {
        match self {
            Self::PixelWidth => "--width",
            Self::PixelHeight => "--height",
            Self::DiagonalSize => "--diagonal",
            Self::ViewingDistance => "--distance",
            Self::PreferredCanvasWidth => "--canvas",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// One rejected field and the localized reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found in one form.  Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the error reported for `field`, if any.
    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates `form` and builds a [`ScreenInput`].
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every field that failed, with
/// messages in `language`.
pub fn validate_form(
    form: &RawForm,
    language: Language,
) -> Result<ScreenInput, ValidationErrors> {
    let labels = language.labels();
    let mut errors = Vec::new();

    let pixel_width = check_pixels(
        form.pixel_width.as_deref(),
        FormField::PixelWidth,
        PixelMessages {
            not_number: labels.width_not_number,
            positive: labels.width_positive,
            integer: labels.width_integer,
        },
        labels,
        &mut errors,
    );
    let pixel_height = check_pixels(
        form.pixel_height.as_deref(),
        FormField::PixelHeight,
        PixelMessages {
            not_number: labels.height_not_number,
            positive: labels.height_positive,
            integer: labels.height_integer,
        },
        labels,
        &mut errors,
    );
    let diagonal_size = check_diagonal(form.diagonal_size.as_deref(), labels, &mut errors);

    let viewing_distance = match form
        .viewing_distance
        .as_deref()
        .map(str::parse::<ViewingDistance>)
    {
        Some(Ok(d)) => Some(d),
        _ => {
            errors.push(FieldError {
                field: FormField::ViewingDistance,
                message: labels.select_distance,
            });
            None
        }
    };

    let preferred_canvas_width = match form
        .preferred_canvas_width
        .as_deref()
        .map(str::parse::<PreferredCanvasWidth>)
    {
        Some(Ok(w)) => Some(w),
        _ => {
            errors.push(FieldError {
                field: FormField::PreferredCanvasWidth,
                message: labels.select_canvas_width,
            });
            None
        }
    };

    match (
        pixel_width,
        pixel_height,
        diagonal_size,
        viewing_distance,
        preferred_canvas_width,
    ) {
        (Some(pixel_width), Some(pixel_height), Some(diagonal_size), Some(vd), Some(pcw))
            if errors.is_empty() =>
        {
            Ok(ScreenInput {
                pixel_width,
                pixel_height,
                diagonal_size,
                viewing_distance: vd,
                preferred_canvas_width: pcw,
            })
        }
        _ => Err(ValidationErrors { errors }),
    }
}

struct PixelMessages {
    not_number: &'static str,
    positive: &'static str,
    integer: &'static str,
}

/// Parses a number, treating an empty field as zero.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    let text = raw.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn check_pixels(
    raw: Option<&str>,
    field: FormField,
    messages: PixelMessages,
    labels: &Labels,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let message = match parse_number(raw) {
        None => messages.not_number,
        Some(v) if v <= 0.0 => messages.positive,
        Some(v) if v.fract() != 0.0 => messages.integer,
        Some(v) if v > f64::from(u32::MAX) => labels.pixels_too_large,
        Some(v) => return Some(v as u32),
    };
    errors.push(FieldError { field, message });
    None
}

fn check_diagonal(raw: Option<&str>, labels: &Labels, errors: &mut Vec<FieldError>) -> Option<f64> {
    let message = match parse_number(raw) {
        None => labels.size_not_number,
        Some(v) if v <= 0.0 => labels.size_positive,
        Some(v) => return Some(v),
    };
    errors.push(FieldError {
        field: FormField::DiagonalSize,
        message,
    });
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
