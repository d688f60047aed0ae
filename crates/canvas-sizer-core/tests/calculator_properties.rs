//! Integration tests for the canvas-sizer-core calculator.
//!
//! These tests sweep a grid of realistic screens through the public API and
//! check the invariants every result must satisfy, rather than individual
//! numbers (those live in the unit tests next to `compute`).

use canvas_sizer_core::{
    compute, CalculatorError, PreferredCanvasWidth, ScreenInput, ViewingDistance, BASE_FONT_SIZE,
};

const RESOLUTIONS: [(u32, u32); 8] = [
    (1, 1),
    (640, 480),
    (1080, 1920),
    (1170, 2532),
    (1920, 1080),
    (2560, 1600),
    (3840, 2160),
    (7680, 4320),
];

const DIAGONALS: [f64; 7] = [0.5, 1.5, 6.1, 13.3, 27.0, 55.0, 120.0];

/// Every combination of resolution, diagonal and the two option sets.
fn all_inputs() -> Vec<ScreenInput> {
    let mut inputs = Vec::new();
    for &(pixel_width, pixel_height) in &RESOLUTIONS {
        for &diagonal_size in &DIAGONALS {
            for viewing_distance in ViewingDistance::ALL {
                for preferred_canvas_width in PreferredCanvasWidth::ALL {
                    inputs.push(ScreenInput {
                        pixel_width,
                        pixel_height,
                        diagonal_size,
                        viewing_distance,
                        preferred_canvas_width,
                    });
                }
            }
        }
    }
    inputs
}

#[test]
fn test_ppi_matches_diagonal_pixels_over_diagonal_size() {
    for input in all_inputs() {
        let result = compute(&input).expect("positive input must compute");
        let w = f64::from(input.pixel_width);
        let h = f64::from(input.pixel_height);
        let expected = ((w * w + h * h).sqrt() / input.diagonal_size * 100.0).round() / 100.0;
        assert_eq!(result.ppi, expected, "ppi mismatch for {input:?}");
    }
}

#[test]
fn test_scaling_factor_and_multiplier_bounds_hold() {
    for input in all_inputs() {
        let result = compute(&input).expect("positive input must compute");

        assert!(result.screen_scaling_factor >= 1, "{input:?}");
        assert!(result.actual_design_multiplier >= 1, "{input:?}");
        assert!(
            result.actual_design_multiplier <= result.screen_scaling_factor,
            "multiplier exceeds device factor for {input:?}"
        );
        assert!(
            result.actual_design_multiplier <= input.preferred_canvas_width.multiplier(),
            "multiplier exceeds preference for {input:?}"
        );
        assert_eq!(
            result.suggested_font_size,
            BASE_FONT_SIZE * result.actual_design_multiplier
        );
    }
}

#[test]
fn test_canvas_keeps_screen_aspect_ratio_within_rounding() {
    for input in all_inputs() {
        let result = compute(&input).expect("positive input must compute");
        if result.canvas_width == 0 || result.canvas_height == 0 {
            // A 1×1 screen divided by a large factor can round to zero.
            continue;
        }
        let screen_ratio = f64::from(input.pixel_width) / f64::from(input.pixel_height);
        let canvas_ratio = f64::from(result.canvas_width) / f64::from(result.canvas_height);

        // Each dimension is off by at most 0.5 px after rounding.
        let w = f64::from(result.canvas_width);
        let h = f64::from(result.canvas_height);
        let tolerance = (w + 0.5) / (h - 0.5).max(0.5) - (w - 0.5) / (h + 0.5);
        assert!(
            (screen_ratio - canvas_ratio).abs() <= tolerance,
            "aspect drift {screen_ratio} vs {canvas_ratio} for {input:?}"
        );
    }
}

#[test]
fn test_asset_export_scale_has_one_decimal() {
    for input in all_inputs() {
        let result = compute(&input).expect("positive input must compute");
        let tenths = result.asset_export_scale * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-9, "{input:?}");
        assert!(result.asset_export_scale >= 1.0, "{input:?}");
    }
}

#[test]
fn test_compute_is_idempotent() {
    for input in all_inputs() {
        let first = compute(&input).expect("positive input must compute");
        let second = compute(&input).expect("positive input must compute");
        assert_eq!(first, second);
        assert_eq!(first.ppi.to_bits(), second.ppi.to_bits());
        assert_eq!(
            first.asset_export_scale.to_bits(),
            second.asset_export_scale.to_bits()
        );
    }
}

#[test]
fn test_larger_diagonal_gives_lower_ppi() {
    for &(pixel_width, pixel_height) in &RESOLUTIONS[1..] {
        let ppis: Vec<f64> = DIAGONALS
            .iter()
            .map(|&diagonal_size| {
                compute(&ScreenInput {
                    pixel_width,
                    pixel_height,
                    diagonal_size,
                    viewing_distance: ViewingDistance::Medium,
                    preferred_canvas_width: PreferredCanvasWidth::W375,
                })
                .expect("positive input must compute")
                .ppi
            })
            .collect();

        for pair in ppis.windows(2) {
            assert!(
                pair[0] > pair[1],
                "ppi must strictly decrease: {ppis:?} for {pixel_width}x{pixel_height}"
            );
        }
    }
}

#[test]
fn test_non_positive_geometry_never_yields_numbers() {
    let bad = [
        (0, 1080, 27.0),
        (1920, 0, 27.0),
        (1920, 1080, 0.0),
        (1920, 1080, -6.1),
        (0, 0, 0.0),
        (1920, 1080, f64::NAN),
    ];

    for (pixel_width, pixel_height, diagonal_size) in bad {
        for viewing_distance in ViewingDistance::ALL {
            for preferred_canvas_width in PreferredCanvasWidth::ALL {
                let result = compute(&ScreenInput {
                    pixel_width,
                    pixel_height,
                    diagonal_size,
                    viewing_distance,
                    preferred_canvas_width,
                });
                assert!(
                    matches!(result, Err(CalculatorError::InvalidScreenGeometry { .. })),
                    "expected rejection for {pixel_width}x{pixel_height} @ {diagonal_size}"
                );
            }
        }
    }
}
