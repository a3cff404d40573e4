//! termreel renders a scripted terminal session into a looping animated GIF.
//!
//! The work is split into four stages:
//!
//! - the sequence builder lays out a [`Storyboard`]: one [`Shot`] per frame, each a
//!   [`Transcript`] snapshot and a hold time
//! - the [`CanvasRenderer`] draws a transcript onto a fixed-size canvas
//! - the GIF encoder ([`encode_gif`], [`save_gif`]) writes frames in order with their holds
//! - the size guard ([`enforce_size_budget`]) re-encodes with a reduced palette when the artifact
//!   is over budget
//!
//! [`build_sequence`] and [`save_sequence`] chain the stages for the bundled demo.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod encode;
mod foundation;
mod pipeline;
mod render;
mod script;

pub use crate::config::{
    DEFAULT_SIZE_BUDGET_BYTES, FontConfig, Geometry, OutputConfig, ReelConfig, Theme, Timing,
    default_output_path,
};
pub use crate::foundation::core::{Canvas, FrameDuration, Rgb8};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::script::demo::DemoScript;
pub use crate::script::line::{Line, Segment};
pub use crate::script::phases::{
    Beat, CURSOR, Detail, PROMPT, WorkPhase, analyzing, banner, command_echo, idle_blink,
    keystroke_delay, prompt_line, summary, typing, work_phase,
};
pub use crate::script::storyboard::{PhaseOutput, Shot, Storyboard};
pub use crate::script::transcript::Transcript;

pub use crate::render::canvas::{CAPTION, CanvasRenderer};
pub use crate::render::font::{FontOrigin, ResolvedFont, resolve_font};
pub use crate::render::frame::{FrameRGBA, Sequence, TimedFrame};

pub use crate::encode::budget::{
    SizeReport, artifact_size, enforce_size_budget, mib, reencode_with_palette,
};
pub use crate::encode::gif::{GifSink, encode_gif, ensure_parent_dir, save_gif, write_artifact};
pub use crate::encode::quantize::{count_colors, quantize_frame, quantize_sequence};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, drain_sequence};

pub use crate::pipeline::{build_sequence, render_storyboard, save_sequence};
