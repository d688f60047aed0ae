//! Display languages and their label tables.
//!
//! Labels are compile-time constants; switching language swaps one table for
//! another and never touches the numbers.

use std::fmt;

use canvas_sizer_core::ViewingDistance;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// The label table for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Zh => &ZH,
            Self::En => &EN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every user-visible string for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub result_title: &'static str,
    pub result_description: &'static str,
    pub canvas_width: &'static str,
    pub canvas_height: &'static str,
    pub asset_export_scale: &'static str,
    pub font_size: &'static str,
    pub screen_ppi: &'static str,
    pub screen_multiplier: &'static str,
    pub usage_distance: &'static str,
    /// Suffix for a multiplier, e.g. `倍` in `2倍`, `x` in `2x`.
    pub times_unit: &'static str,
    /// Shown instead of a result while the screen geometry is incomplete.
    pub prompt: &'static str,
    pub preview_placeholder: &'static str,
    pub disclaimer: &'static str,

    pub distance_close: &'static str,
    pub distance_medium: &'static str,
    pub distance_far: &'static str,

    // Validation messages.
    pub width_not_number: &'static str,
    pub width_positive: &'static str,
    pub width_integer: &'static str,
    pub height_not_number: &'static str,
    pub height_positive: &'static str,
    pub height_integer: &'static str,
    pub pixels_too_large: &'static str,
    pub size_not_number: &'static str,
    pub size_positive: &'static str,
    pub select_distance: &'static str,
    pub select_canvas_width: &'static str,
}

impl Labels {
    /// Option label for a viewing distance.
    pub fn viewing_distance(&self, distance: ViewingDistance) -> &'static str {
        match distance {
            ViewingDistance::Close => self.distance_close,
            ViewingDistance::Medium => self.distance_medium,
            ViewingDistance::Far => self.distance_far,
        }
    }
}

static ZH: Labels = Labels {
    title: "UI画布尺寸计算器",
    result_title: "计算结果",
    result_description: "根据您的输入，建议的设计参数如下：",
    canvas_width: "画布宽度",
    canvas_height: "画布高度",
    asset_export_scale: "切图倍数",
    font_size: "小字建议字号",
    screen_ppi: "屏幕PPI",
    screen_multiplier: "屏幕倍数",
    usage_distance: "使用距离",
    times_unit: "倍",
    prompt: "请填写屏幕像素宽度、高度和尺寸后查看计算结果。",
    preview_placeholder: "输入参数后显示预览",
    disclaimer: "计算结果基于统计，反映大多数屏幕情况，仅供参考。",

    distance_close: "近距离/触屏",
    distance_medium: "中距离/键鼠",
    distance_far: "远距离/遥控",

    width_not_number: "宽度必须是数字",
    width_positive: "宽度必须大于0",
    width_integer: "宽度必须是整数",
    height_not_number: "高度必须是数字",
    height_positive: "高度必须大于0",
    height_integer: "高度必须是整数",
    pixels_too_large: "像素值过大",
    size_not_number: "尺寸必须是数字",
    size_positive: "尺寸必须大于0",
    select_distance: "请选择使用距离",
    select_canvas_width: "请选择习惯宽度",
};

static EN: Labels = Labels {
    title: "UI Canvas Size Calculator",
    result_title: "Calculation Result",
    result_description: "Based on your input, here are the recommended design parameters:",
    canvas_width: "Canvas Width",
    canvas_height: "Canvas Height",
    asset_export_scale: "Asset Export Scale",
    font_size: "Small Font Size",
    screen_ppi: "Screen PPI",
    screen_multiplier: "Screen Multiplier",
    usage_distance: "Usage Distance",
    times_unit: "x",
    prompt: "Enter the screen's pixel width, height and size to see the result.",
    preview_placeholder: "Preview appears once parameters are entered",
    disclaimer: "Results are statistical estimates for reference only.",

    distance_close: "Close/Touch",
    distance_medium: "Medium/Mouse",
    distance_far: "Far/Remote",

    width_not_number: "Width must be a number",
    width_positive: "Width must be greater than 0",
    width_integer: "Width must be an integer",
    height_not_number: "Height must be a number",
    height_positive: "Height must be greater than 0",
    height_integer: "Height must be an integer",
    pixels_too_large: "Pixel value is too large",
    size_not_number: "Size must be a number",
    size_positive: "Size must be greater than 0",
    select_distance: "Please select a usage distance",
    select_canvas_width: "Please select a preferred width",
};
