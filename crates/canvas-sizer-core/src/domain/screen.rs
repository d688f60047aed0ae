//! Screen input domain types.
//!
//! [`ScreenInput`] is what the caller hands to the calculator.  The two option
//! sets are closed enums: every variant maps to exactly one divisor or design
//! multiplier, so the calculator never needs a fallback for an unknown value.
//! Unknown strings are rejected when they are parsed, not inside the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known option.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOptionError {
    /// The value is not one of `close`, `medium`, `far`.
    #[error("unknown viewing distance: {0:?} (expected close, medium or far)")]
    ViewingDistance(String),

    /// The value is not one of `375`, `750`, `1125`.
    #[error("unknown preferred canvas width: {0:?} (expected 375, 750 or 1125)")]
    CanvasWidth(String),
}

/// How far the viewer is from the screen.
///
/// Each distance selects a fixed PPI divisor: the farther away the viewer,
/// the more physical pixels fit into one perceived "logical" pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewingDistance {
    /// Hand-held or touch screens.
    Close,
    /// Desk screens driven by keyboard and mouse.
    Medium,
    /// Screens operated with a remote control (TVs, signage).
    Far,
}

impl ViewingDistance {
    /// All variants, in presentation order.
    pub const ALL: [ViewingDistance; 3] = [Self::Close, Self::Medium, Self::Far];

    /// PPI divisor used to derive the screen scaling factor.
    pub fn divisor(self) -> f64 {
        match self {
            Self::Close => 150.0,
            Self::Medium => 110.0,
            Self::Far => 40.0,
        }
    }

    /// The wire value (`"close"`, `"medium"`, `"far"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Medium => "medium",
            Self::Far => "far",
        }
    }
}

impl fmt::Display for ViewingDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewingDistance {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close" => Ok(Self::Close),
            "medium" => Ok(Self::Medium),
            "far" => Ok(Self::Far),
            _ => Err(ParseOptionError::ViewingDistance(s.to_string())),
        }
    }
}

/// The canvas width a designer habitually works on.
///
/// 375 / 750 / 1125 are the 1x / 2x / 3x widths of the classic phone canvas;
/// each selects the design multiplier it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredCanvasWidth {
    #[serde(rename = "375")]
    W375,
    #[serde(rename = "750")]
    W750,
    #[serde(rename = "1125")]
    W1125,
}

impl PreferredCanvasWidth {
    /// All variants, in presentation order.
    pub const ALL: [PreferredCanvasWidth; 3] = [Self::W375, Self::W750, Self::W1125];

    /// The design multiplier this canvas convention assumes.
    pub fn multiplier(self) -> u32 {
        match self {
            Self::W375 => 1,
            Self::W750 => 2,
            Self::W1125 => 3,
        }
    }

    /// The wire value (`"375"`, `"750"`, `"1125"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W375 => "375",
            Self::W750 => "750",
            Self::W1125 => "1125",
        }
    }
}

impl fmt::Display for PreferredCanvasWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredCanvasWidth {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches("px") {
            "375" => Ok(Self::W375),
            "750" => Ok(Self::W750),
            "1125" => Ok(Self::W1125),
            _ => Err(ParseOptionError::CanvasWidth(s.to_string())),
        }
    }
}

/// Screen parameters for one calculation.
///
/// Built fresh for every input change; the calculator never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInput {
    /// Horizontal resolution in pixels.
    pub pixel_width: u32,
    /// Vertical resolution in pixels.
    pub pixel_height: u32,
    /// Physical diagonal in inches.
    pub diagonal_size: f64,
    pub viewing_distance: ViewingDistance,
    pub preferred_canvas_width: PreferredCanvasWidth,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
