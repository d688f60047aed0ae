//! CalculateUseCase: raw form in, something to show out.
//!
//! Chains the validator and the core calculator and classifies the result the
//! way a front end needs it: a result to display, field errors to show next to
//! the inputs, or a prompt because the screen geometry is not usable yet.

use canvas_sizer_core::{compute, CalculatorError, DesignResult, ScreenInput};
use tracing::debug;

use super::locale::Language;
use super::validate_form::{validate_form, RawForm, ValidationErrors};

/// What the front end should display for one form state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A fresh result replacing any previous one, with the input it came from.
    Computed(ScreenInput, DesignResult),
    /// The form has mistakes; show these next to the fields.
    Invalid(ValidationErrors),
    /// The calculator rejected the geometry; show the prompt, not an error.
    Incomplete,
}

/// Validates `form` and, if it passes, computes the design parameters.
pub fn calculate(form: &RawForm, language: Language) -> Outcome {
    let input = match validate_form(form, language) {
        Ok(input) => input,
        Err(errors) => {
            debug!("form rejected: {errors}");
            return Outcome::Invalid(errors);
        }
    };

    match compute(&input) {
        Ok(result) => Outcome::Computed(input, result),
        Err(e @ CalculatorError::InvalidScreenGeometry { .. }) => {
            debug!("no result: {e}");
            Outcome::Incomplete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validate_form::FormField;
    use canvas_sizer_core::ViewingDistance;

    fn form(w: &str, h: &str, d: &str, distance: &str, canvas: &str) -> RawForm {
        RawForm {
            pixel_width: Some(w.to_string()),
            pixel_height: Some(h.to_string()),
            diagonal_size: Some(d.to_string()),
            viewing_distance: Some(distance.to_string()),
            preferred_canvas_width: Some(canvas.to_string()),
        }
    }

    #[test]
    fn test_valid_form_is_computed() {
        let outcome = calculate(&form("1920", "1080", "27", "medium", "375"), Language::Zh);
        match outcome {
            Outcome::Computed(input, result) => {
                assert_eq!(input.viewing_distance, ViewingDistance::Medium);
                assert_eq!(result.canvas_width, 1920);
                assert_eq!(result.canvas_height, 1080);
                assert_eq!(result.suggested_font_size, 12);
            }
            other => panic!("expected a result, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_form_returns_field_errors() {
        let outcome = calculate(&form("1920", "abc", "27", "medium", "375"), Language::En);
        match outcome {
            Outcome::Invalid(errors) => {
                assert!(errors.for_field(FormField::PixelHeight).is_some());
                assert_eq!(errors.errors.len(), 1);
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn test_tiny_diagonal_still_computes() {
        // 0.001" passes validation; the core handles any positive diagonal.
        let outcome = calculate(&form("100", "100", "0.001", "close", "1125"), Language::En);
        assert!(matches!(outcome, Outcome::Computed(..)));
    }

    #[test]
    fn test_unrepresentable_diagonal_shows_prompt() {
        // Positive text passes validation, but the density overflows.
        let outcome = calculate(&form("1920", "1080", "1e-300", "close", "1125"), Language::En);
        assert_eq!(outcome, Outcome::Incomplete);
    }
}
