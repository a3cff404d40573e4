//! Typed configuration for a build.
//!
//! There is no configuration file and no command-line surface: a build runs from
//! [`ReelConfig::default`]. The option structs exist so geometry, palette and timing live in one
//! place and so tests can shrink the canvas.

use std::path::PathBuf;

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{ReelError, ReelResult};

/// Full build configuration.
#[derive(Clone, Debug, Default)]
pub struct ReelConfig {
    /// Canvas and layout metrics.
    pub geometry: Geometry,
    /// Font preference and sizes.
    pub font: FontConfig,
    /// Colors.
    pub theme: Theme,
    /// Per-phase frame durations.
    pub timing: Timing,
    /// Artifact location and size guard.
    pub output: OutputConfig,
}

impl ReelConfig {
    /// Return the configuration with a different geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Return the configuration with different output options.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Return the configuration with a different font preference.
    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    /// Check every section; the first violation is returned.
    pub fn validate(&self) -> ReelResult<()> {
        self.geometry.validate()?;
        self.font.validate()?;
        self.timing.validate()?;
        self.output.validate()
    }
}

/// Canvas size and the fixed positions of the window chrome and text rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Height of the header bar; the 1px border sits directly below it.
    pub title_bar_height: u32,
    /// Left margin of every text line.
    pub padding_x: f32,
    /// Top of the first text row.
    pub padding_y: f32,
    /// Vertical advance between rows.
    pub line_height: f32,
    /// Center x of the first window-control dot.
    pub dot_origin_x: f32,
    /// Horizontal distance between dot centers.
    pub dot_spacing: f32,
    /// Dot radius.
    pub dot_radius: f32,
    /// Top of the caption text inside the header bar.
    pub caption_y: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 800,
            height: 720,
            title_bar_height: 38,
            padding_x: 24.0,
            padding_y: 50.0,
            line_height: 22.0,
            dot_origin_x: 20.0,
            dot_spacing: 22.0,
            dot_radius: 6.0,
            caption_y: 11.0,
        }
    }
}

impl Geometry {
    /// Return the geometry resized to `width` x `height`, keeping every other metric.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The canvas described by this geometry.
    pub fn canvas(&self) -> ReelResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    fn validate(&self) -> ReelResult<()> {
        self.canvas()?;
        if self.title_bar_height >= self.height {
            return Err(ReelError::validation(
                "title bar must be shorter than the canvas",
            ));
        }
        let metrics = [
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
            ("line_height", self.line_height),
            ("dot_origin_x", self.dot_origin_x),
            ("dot_spacing", self.dot_spacing),
            ("dot_radius", self.dot_radius),
            ("caption_y", self.caption_y),
        ];
        for (name, v) in metrics {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(format!(
                    "geometry.{name} must be finite and >= 0"
                )));
            }
        }
        if self.line_height == 0.0 {
            return Err(ReelError::validation("geometry.line_height must be > 0"));
        }
        Ok(())
    }
}

/// Font preference. Resolution happens once, see [`crate::resolve_font`].
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    /// Font file tried first.
    pub preferred_path: PathBuf,
    /// Family name expected inside `preferred_path`.
    pub preferred_family: String,
    /// Installed families tried, in order, when the preferred file is unusable.
    pub fallback_families: Vec<String>,
    /// Size of transcript text.
    pub body_size_px: f32,
    /// Size of the header caption.
    pub caption_size_px: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            preferred_path: PathBuf::from("/System/Library/Fonts/Menlo.ttc"),
            preferred_family: "Menlo".to_string(),
            fallback_families: vec![
                "DejaVu Sans Mono".to_string(),
                "Liberation Mono".to_string(),
                "Courier New".to_string(),
            ],
            body_size_px: 15.0,
            caption_size_px: 12.0,
        }
    }
}

impl FontConfig {
    fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("body_size_px", self.body_size_px),
            ("caption_size_px", self.caption_size_px),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::validation(format!(
                    "font.{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Colors used by the chrome and the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub background: Rgb8,
    /// Default text, also used for unstyled lines.
    pub text: Rgb8,
    /// Secondary text and the header caption.
    pub dim: Rgb8,
    /// Success marks.
    pub green: Rgb8,
    /// Headings and paths.
    pub cyan: Rgb8,
    /// Accents.
    pub yellow: Rgb8,
    /// Tool names.
    pub blue: Rgb8,
    /// Emphasis and the cursor block.
    pub white: Rgb8,
    /// The `$ ` prompt.
    pub prompt: Rgb8,
    /// Header bar bottom border.
    pub border: Rgb8,
    /// Header bar fill.
    pub title_bar: Rgb8,
    /// Window-control dots, left to right.
    pub dots: [Rgb8; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb8::new(30, 30, 46),
            text: Rgb8::new(205, 214, 244),
            dim: Rgb8::new(127, 132, 156),
            green: Rgb8::new(166, 227, 161),
            cyan: Rgb8::new(137, 220, 235),
            yellow: Rgb8::new(249, 226, 175),
            blue: Rgb8::new(137, 180, 250),
            white: Rgb8::new(255, 255, 255),
            prompt: Rgb8::new(166, 227, 161),
            border: Rgb8::new(69, 71, 90),
            title_bar: Rgb8::new(40, 42, 54),
            dots: [
                Rgb8::new(255, 95, 86),
                Rgb8::new(255, 189, 46),
                Rgb8::new(39, 201, 63),
            ],
        }
    }
}

/// Frame durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Prompt shown with the cursor block.
    pub blink_on_ms: u32,
    /// Prompt shown without the cursor block.
    pub blink_off_ms: u32,
    /// Number of on/off pairs before typing starts.
    pub blink_repeats: u32,
    /// Default delay per typed character.
    pub keystroke_ms: u32,
    /// Delay after a typed space.
    pub after_space_ms: u32,
    /// Hesitation after the last character, before the command is submitted.
    pub before_submit_ms: u32,
    /// Submitted command, cursor gone.
    pub command_echo_ms: u32,
    /// Tool banner.
    pub banner_ms: u32,
    /// "Analyzing" line.
    pub analyzing_ms: u32,
    /// Work-phase heading.
    pub phase_header_ms: u32,
    /// Work-phase completion line.
    pub phase_done_ms: u32,
    /// Last frame before the animation loops.
    pub final_hold_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            blink_on_ms: 400,
            blink_off_ms: 300,
            blink_repeats: 3,
            keystroke_ms: 45,
            after_space_ms: 100,
            before_submit_ms: 400,
            command_echo_ms: 600,
            banner_ms: 800,
            analyzing_ms: 1000,
            phase_header_ms: 500,
            phase_done_ms: 800,
            final_hold_ms: 3000,
        }
    }
}

impl Timing {
    fn validate(&self) -> ReelResult<()> {
        let durations = [
            ("blink_on_ms", self.blink_on_ms),
            ("blink_off_ms", self.blink_off_ms),
            ("keystroke_ms", self.keystroke_ms),
            ("after_space_ms", self.after_space_ms),
            ("before_submit_ms", self.before_submit_ms),
            ("command_echo_ms", self.command_echo_ms),
            ("banner_ms", self.banner_ms),
            ("analyzing_ms", self.analyzing_ms),
            ("phase_header_ms", self.phase_header_ms),
            ("phase_done_ms", self.phase_done_ms),
            ("final_hold_ms", self.final_hold_ms),
        ];
        for (name, ms) in durations {
            if ms == 0 {
                return Err(ReelError::validation(format!("timing.{name} must be > 0")));
            }
        }
        if self.after_space_ms < self.keystroke_ms {
            return Err(ReelError::validation(
                "timing.after_space_ms must be >= timing.keystroke_ms",
            ));
        }
        if self.before_submit_ms <= self.after_space_ms.max(self.keystroke_ms) {
            return Err(ReelError::validation(
                "timing.before_submit_ms must exceed every other keystroke delay",
            ));
        }
        Ok(())
    }
}

/// Artifact location, encoder knobs and the size guard.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputConfig {
    /// Where the GIF is written.
    pub path: PathBuf,
    /// Artifacts larger than this are re-encoded with a reduced palette.
    pub size_budget_bytes: u64,
    /// Palette size used by the re-encoder.
    pub quantize_colors: u16,
    /// GIF encoder speed, `1` (best) to `30` (fastest).
    pub encode_speed: i32,
}

/// 5 MiB.
pub const DEFAULT_SIZE_BUDGET_BYTES: u64 = 5 * 1024 * 1024;

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            size_budget_bytes: DEFAULT_SIZE_BUDGET_BYTES,
            quantize_colors: 64,
            encode_speed: 10,
        }
    }
}

impl OutputConfig {
    /// Options writing to `path`, everything else default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Return the options with a different size budget.
    pub fn with_size_budget(mut self, bytes: u64) -> Self {
        self.size_budget_bytes = bytes;
        self
    }

    fn validate(&self) -> ReelResult<()> {
        if !(2..=256).contains(&self.quantize_colors) {
            return Err(ReelError::validation(
                "output.quantize_colors must be in 2..=256",
            ));
        }
        if !(1..=30).contains(&self.encode_speed) {
            return Err(ReelError::validation(
                "output.encode_speed must be in 1..=30",
            ));
        }
        if self.path.as_os_str().is_empty() {
            return Err(ReelError::validation("output.path must be non-empty"));
        }
        Ok(())
    }
}

/// `assets/demo-cli.gif` next to this crate's manifest.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("demo-cli.gif")
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
