//! Canvas sizer — entry point.
//!
//! Computes the recommended UI design canvas for a screen from its pixel
//! resolution, diagonal size and viewing distance, and the designer's habitual
//! canvas width.
//!
//! # Usage
//!
//! ```text
//! canvas-sizer [OPTIONS]
//!
//! Options:
//!   --width    <PX>       Screen pixel width            [default: from config, 1920]
//!   --height   <PX>       Screen pixel height           [default: from config, 1080]
//!   --diagonal <INCHES>   Screen diagonal in inches     [default: from config, 27]
//!   --distance <DIST>     close | medium | far          [default: from config, medium]
//!   --canvas   <WIDTH>    375 | 750 | 1125              [default: from config, 375]
//!   --lang     <LANG>     zh | en                       [default: from config, zh]
//!   --format   <FORMAT>   text | json                   [default: text]
//!   --config   <PATH>     Config file                   [default: platform config dir]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                 | Flag         |
//! |--------------------------|--------------|
//! | `CANVAS_SIZER_WIDTH`     | `--width`    |
//! | `CANVAS_SIZER_HEIGHT`    | `--height`   |
//! | `CANVAS_SIZER_DIAGONAL`  | `--diagonal` |
//! | `CANVAS_SIZER_DISTANCE`  | `--distance` |
//! | `CANVAS_SIZER_CANVAS`    | `--canvas`   |
//! | `CANVAS_SIZER_LANG`      | `--lang`     |
//! | `CANVAS_SIZER_CONFIG`    | `--config`   |
//!
//! CLI args take precedence over environment variables, which take precedence
//! over the config file.
//!
//! # Exit status
//!
//! `0` when a result (or the "fill in the form" prompt) was printed, `2` when
//! the input has field errors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use canvas_sizer::application::calculate::{calculate, Outcome};
use canvas_sizer::application::locale::Language;
use canvas_sizer::application::present::{render_json, render_prompt, render_report};
use canvas_sizer::application::validate_form::RawForm;
use canvas_sizer::infrastructure::storage::config::{
    load_config, load_config_from, AppConfig, ConfigError, FormDefaults,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Labelled lines with a text preview of the canvas.
    Text,
    /// The raw result as JSON with camelCase keys.
    Json,
}

/// UI canvas size calculator.
///
/// Numeric options are taken as text and checked by the form validator, so
/// mistakes are reported in the selected language rather than by clap.
#[derive(Debug, Parser)]
#[command(
    name = "canvas-sizer",
    about = "Recommends a UI design canvas size for a screen",
    version
)]
struct Cli {
    /// Screen pixel width.
    #[arg(long, env = "CANVAS_SIZER_WIDTH")]
    width: Option<String>,

    /// Screen pixel height.
    #[arg(long, env = "CANVAS_SIZER_HEIGHT")]
    height: Option<String>,

    /// Screen diagonal in inches.
    #[arg(long, env = "CANVAS_SIZER_DIAGONAL")]
    diagonal: Option<String>,

    /// Viewing distance: close (touch), medium (keyboard and mouse), far (remote).
    #[arg(long, env = "CANVAS_SIZER_DISTANCE")]
    distance: Option<String>,

    /// Habitual design canvas width: 375 (1x), 750 (2x) or 1125 (3x).
    #[arg(long, env = "CANVAS_SIZER_CANVAS")]
    canvas: Option<String>,

    /// Display language.
    #[arg(long, value_enum, env = "CANVAS_SIZER_LANG")]
    lang: Option<Language>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Path to a TOML config file.  Defaults to the platform config directory.
    #[arg(long, env = "CANVAS_SIZER_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Builds the raw form, filling any option not given from `defaults`.
    fn to_raw_form(&self, defaults: &FormDefaults) -> RawForm {
        RawForm {
            pixel_width: Some(
                self.width
                    .clone()
                    .unwrap_or_else(|| defaults.pixel_width.to_string()),
            ),
            pixel_height: Some(
                self.height
                    .clone()
                    .unwrap_or_else(|| defaults.pixel_height.to_string()),
            ),
            diagonal_size: Some(
                self.diagonal
                    .clone()
                    .unwrap_or_else(|| defaults.diagonal_size.to_string()),
            ),
            viewing_distance: Some(
                self.distance
                    .clone()
                    .unwrap_or_else(|| defaults.viewing_distance.to_string()),
            ),
            preferred_canvas_width: Some(
                self.canvas
                    .clone()
                    .unwrap_or_else(|| defaults.preferred_canvas_width.to_string()),
            ),
        }
    }

    /// Loads the config file named by `--config`, or the platform default.
    ///
    /// A missing platform config directory is not an error: the built-in
    /// defaults are used.
    fn load_config(&self) -> Result<AppConfig, ConfigError> {
        match &self.config {
            Some(path) => load_config_from(path),
            None => match load_config() {
                Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
                other => other,
            },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
/// 2. The config file is loaded (defaults if absent).
/// 3. `tracing_subscriber` is initialised, writing to stderr.  The level comes
///    from `RUST_LOG`, else from the config file's `display.log_level`.
/// 4. The form is validated and computed, and the outcome printed.
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_result = cli.load_config();

    // ── Logging setup ─────────────────────────────────────────────────────────
    let log_level = config_result
        .as_ref()
        .map(|cfg| cfg.display.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config_result.context("failed to load configuration")?;
    let language = cli.lang.unwrap_or(config.display.language);
    let form = cli.to_raw_form(&config.defaults);

    info!(?form, %language, "calculating canvas size");

    match calculate(&form, language) {
        Outcome::Computed(input, result) => {
            match cli.format {
                OutputFormat::Text => println!(
                    "{}",
                    render_report(&result, input.viewing_distance, language)
                ),
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&result).context("failed to serialize result")?
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Incomplete => {
            println!("{}", render_prompt(language));
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Invalid(errors) => {
            warn!("{errors}");
            for error in &errors.errors {
                eprintln!("{error}");
            }
            Ok(ExitCode::from(2))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
