//! Result presentation.
//!
//! Maps a [`DesignResult`] to labelled display lines and a small text preview
//! of the canvas.  Nothing here computes design values: it appends unit
//! suffixes, picks labels for the chosen [`Language`] and scales the preview
//! box produced by [`preview_box`].

use std::fmt;

use canvas_sizer_core::{preview_box, DesignResult, ViewingDistance};

use super::locale::Language;

/// Width of the text preview in terminal columns.
pub const PREVIEW_COLUMNS: f64 = 40.0;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// A label and its formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

/// A fully formatted result, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: &'static str,
    pub description: &'static str,
    /// Canvas width, canvas height, asset export scale, font size.
    pub lines: Vec<ReportLine>,
    /// Screen PPI, screen multiplier and the viewing distance they assume.
    pub screen_lines: Vec<ReportLine>,
    /// Text drawing of the canvas, one string per row.
    pub preview: Vec<String>,
    pub disclaimer: &'static str,
}

/// Formats `result`, computed for `distance`, in `language`.
pub fn render_report(
    result: &DesignResult,
    distance: ViewingDistance,
    language: Language,
) -> Report {
    let labels = language.labels();

    let font_scale_text = match language {
        Language::Zh => result.font_export_scale_text.clone(),
        Language::En => format!("{}{}", result.actual_design_multiplier, labels.times_unit),
    };

    let lines = vec![
        ReportLine {
            label: labels.canvas_width,
            value: format!("{} px", result.canvas_width),
        },
        ReportLine {
            label: labels.canvas_height,
            value: format!("{} px", result.canvas_height),
        },
        ReportLine {
            label: labels.asset_export_scale,
            value: format!("{}x", result.asset_export_scale),
        },
        ReportLine {
            label: labels.font_size,
            value: format!("{}px ({font_scale_text})", result.suggested_font_size),
        },
    ];

    let screen_lines = vec![
        ReportLine {
            label: labels.screen_ppi,
            value: result.ppi.to_string(),
        },
        ReportLine {
            label: labels.screen_multiplier,
            value: format!("{}x", result.screen_scaling_factor),
        },
        ReportLine {
            label: labels.usage_distance,
            value: labels.viewing_distance(distance).to_string(),
        },
    ];

    let preview = render_preview(result.canvas_width, result.canvas_height)
        .unwrap_or_else(|| vec![labels.preview_placeholder.to_string()]);

    Report {
        title: labels.result_title,
        description: labels.result_description,
        lines,
        screen_lines,
        preview,
        disclaimer: labels.disclaimer,
    }
}

/// The text shown when the calculator rejected the input.
///
/// Incomplete geometry is an ordinary state while filling in the form, so this
/// reads as a prompt, not as an error.
pub fn render_prompt(language: Language) -> String {
    let labels = language.labels();
    format!("{}\n{}", labels.title, labels.prompt)
}

/// Serializes `result` as pretty-printed JSON with camelCase keys.
///
/// # Errors
///
/// Propagates any `serde_json` serialization error.
pub fn render_json(result: &DesignResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Draws a proportional box with the width above it and the height beside it.
///
/// Returns `None` when there is nothing to draw.
fn render_preview(canvas_width: u32, canvas_height: u32) -> Option<Vec<String>> {
    let geometry = preview_box(canvas_width, canvas_height, PREVIEW_COLUMNS)?;

    let inner_cols = (geometry.width.round() as usize).max(1);
    let inner_rows = ((geometry.height / CELL_ASPECT).round() as usize).max(1);

    let width_label = format!("{canvas_width}px");
    let height_label = format!("{canvas_height}px");

    let mut rows = Vec::with_capacity(inner_rows + 3);

    let pad = (inner_cols + 2).saturating_sub(width_label.len()) / 2;
    rows.push(format!("{}{width_label}", " ".repeat(pad)));

    let border = format!("+{}+", "-".repeat(inner_cols));
    rows.push(border.clone());
    let middle = inner_rows / 2;
    for row in 0..inner_rows {
        let mut line = format!("|{}|", " ".repeat(inner_cols));
        if row == middle {
            line.push(' ');
            line.push_str(&height_label);
        }
        rows.push(line);
    }
    rows.push(border);

    Some(rows)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for row in &self.preview {
            writeln!(f, "  {row}")?;
        }
        writeln!(f)?;
        for line in self.lines.iter().chain(&self.screen_lines) {
            writeln!(f, "  {}: {}", line.label, line.value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.disclaimer)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
