//! Integration tests for the canvas-sizer application layer.
//!
//! Drives raw form text through validation, the core calculation and the
//! presenter together, the way the binary does.

use canvas_sizer::application::calculate::{calculate, Outcome};
use canvas_sizer::application::locale::Language;
use canvas_sizer::application::present::{render_json, render_report};
use canvas_sizer::application::validate_form::{FormField, RawForm};
use canvas_sizer_core::{DesignResult, ScreenInput};

fn form(w: &str, h: &str, d: &str, distance: &str, canvas: &str) -> RawForm {
    RawForm {
        pixel_width: Some(w.to_string()),
        pixel_height: Some(h.to_string()),
        diagonal_size: Some(d.to_string()),
        viewing_distance: Some(distance.to_string()),
        preferred_canvas_width: Some(canvas.to_string()),
    }
}

fn computed(outcome: Outcome) -> (ScreenInput, DesignResult) {
    match outcome {
        Outcome::Computed(input, result) => (input, result),
        other => panic!("expected a result, got {other:?}"),
    }
}

#[test]
fn test_phone_report_in_chinese() {
    let (input, result) = computed(calculate(
        &form("2796", "1290", "6.1", "close", "375"),
        Language::Zh,
    ));

    let text = render_report(&result, input.viewing_distance, Language::Zh).to_string();

    assert!(text.contains("画布宽度: 932 px"));
    assert!(text.contains("画布高度: 430 px"));
    assert!(text.contains("切图倍数: 3x"));
    assert!(text.contains("小字建议字号: 12px (1倍)"));
    assert!(text.contains("屏幕PPI: 504.79"));
    assert!(text.contains("屏幕倍数: 3x"));
    assert!(text.contains("使用距离: 近距离/触屏"));
}

#[test]
fn test_tv_report_in_english() {
    let (input, result) = computed(calculate(
        &form("3840", "2160", "55", "far", "1125"),
        Language::En,
    ));

    let text = render_report(&result, input.viewing_distance, Language::En).to_string();

    assert!(text.contains("Canvas Width: 3840 px"));
    assert!(text.contains("Asset Export Scale: 1x"));
    assert!(text.contains("Small Font Size: 24px (2x)"));
    assert!(text.contains("Usage Distance: Far/Remote"));
}

#[test]
fn test_json_output_round_trips_to_the_same_result() {
    let (_, result) = computed(calculate(
        &form("2560", "1440", "18.36", "far", "1125"),
        Language::En,
    ));

    let json = render_json(&result).expect("serialize");
    let restored: DesignResult = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, result);
    assert_eq!(restored.asset_export_scale, 1.3);
}

#[test]
fn test_every_bad_field_is_reported_together() {
    let outcome = calculate(&form("0", "10.5", "", "sofa", "2000"), Language::En);

    match outcome {
        Outcome::Invalid(errors) => {
            assert_eq!(errors.errors.len(), 5);
            for field in [
                FormField::PixelWidth,
                FormField::PixelHeight,
                FormField::DiagonalSize,
                FormField::ViewingDistance,
                FormField::PreferredCanvasWidth,
            ] {
                assert!(errors.for_field(field).is_some(), "{field} not reported");
            }
        }
        other => panic!("expected field errors, got {other:?}"),
    }
}
