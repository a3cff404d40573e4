//! The hand-authored demo: a `markupr analyze` run from prompt to summary.

use crate::config::{Theme, Timing};
use crate::foundation::error::{ReelError, ReelResult};
use crate::script::line::{Line, Segment};
use crate::script::phases::{self, Beat, Detail, WorkPhase};
use crate::script::storyboard::Storyboard;
use crate::script::transcript::Transcript;

/// Width of the summary's horizontal rule, in characters.
const RULE_WIDTH: usize = 43;

/// Fixed content of the animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoScript {
    /// Command typed at the prompt.
    pub command: String,
    /// Banner printed once the command starts.
    pub banner: Vec<Segment>,
    /// Status row naming the input.
    pub analyzing: Vec<Segment>,
    /// Work phases in order.
    pub phases: Vec<WorkPhase>,
    /// Closing beats; the last one receives the final hold.
    pub summary: Vec<Beat>,
}

impl DemoScript {
    /// The built-in script, colored with `theme`.
    pub fn markupr(theme: &Theme) -> Self {
        let t = theme;
        let branch_text = |s: &str| vec![Segment::new(s, t.dim)];

        Self {
            command: "npx markupr analyze ./demo-recording.mov".to_string(),
            banner: vec![
                Segment::new("  markupr", t.cyan),
                Segment::new(" v2.6.0", t.dim),
                Segment::new(" \u{2014} Intelligent Developer Feedback", t.dim),
            ],
            analyzing: vec![
                Segment::new("  \u{25b8} ", t.yellow),
                Segment::new("Analyzing: ", t.text),
                Segment::new("demo-recording.mov", t.white),
                Segment::new(" (2m 34s)", t.dim),
            ],
            phases: vec![
                WorkPhase {
                    title: "Transcription".to_string(),
                    details: vec![
                        Detail {
                            segments: vec![
                                Segment::new("Using: ", t.text),
                                Segment::new("Local Whisper (base model)", t.blue),
                            ],
                            hold_ms: 600,
                        },
                        Detail {
                            segments: branch_text("Processing audio..."),
                            hold_ms: 1800,
                        },
                    ],
                    done: "12 segments transcribed (2m 34s)".to_string(),
                },
                WorkPhase {
                    title: "Frame Extraction".to_string(),
                    details: vec![
                        Detail {
                            segments: branch_text("Detecting key moments from transcript..."),
                            hold_ms: 1200,
                        },
                        Detail {
                            segments: branch_text("Extracting frames at timestamps..."),
                            hold_ms: 1400,
                        },
                    ],
                    done: "8 frames captured".to_string(),
                },
                WorkPhase {
                    title: "Document Generation".to_string(),
                    details: vec![
                        Detail {
                            segments: branch_text("Correlating screenshots with transcript..."),
                            hold_ms: 1000,
                        },
                        Detail {
                            segments: branch_text("Building structured markdown..."),
                            hold_ms: 1200,
                        },
                    ],
                    done: "Document ready".to_string(),
                },
            ],
            summary: vec![
                Beat {
                    lines: vec![
                        Line::blank(),
                        Line::styled([
                            ("  ".to_string(), t.text),
                            ("\u{2501}".repeat(RULE_WIDTH), t.dim),
                        ]),
                    ],
                    hold_ms: 600,
                },
                Beat {
                    lines: vec![
                        Line::blank(),
                        Line::styled([
                            ("  \u{2713} ", t.green),
                            ("Output: ", t.text),
                            ("./markupr-output/demo-recording.md", t.cyan),
                        ]),
                    ],
                    hold_ms: 800,
                },
                Beat {
                    lines: vec![
                        Line::blank(),
                        Line::styled([
                            ("    Markdown document with ", t.dim),
                            ("8", t.white),
                            (" embedded screenshots", t.dim),
                        ]),
                    ],
                    hold_ms: 500,
                },
                Beat {
                    lines: vec![Line::styled([
                        ("    ", t.text),
                        ("3", t.white),
                        (" issues identified, ", t.dim),
                        ("2", t.white),
                        (" suggestions captured", t.dim),
                    ])],
                    hold_ms: 500,
                },
                Beat {
                    lines: vec![Line::styled([("    File path copied to clipboard", t.dim)])],
                    hold_ms: 600,
                },
                Beat {
                    lines: vec![
                        Line::blank(),
                        Line::styled([
                            ("  Paste into your AI coding agent to action feedback ", t.dim),
                            ("\u{2192}", t.yellow),
                        ]),
                    ],
                    hold_ms: 600,
                },
            ],
        }
    }

    /// Walk every phase in order and collect the shots.
    ///
    /// Idle blink, typing, command echo, banner, analyzing, each work phase, summary; the last
    /// shot is then held for `timing.final_hold_ms`.
    #[tracing::instrument(skip_all, fields(command = %self.command))]
    pub fn storyboard(&self, theme: &Theme, timing: &Timing) -> ReelResult<Storyboard> {
        if self.command.is_empty() {
            return Err(ReelError::validation("demo command must be non-empty"));
        }

        let mut board = Storyboard::new();
        let state = Transcript::new();

        let state = board.absorb(phases::idle_blink(&state, theme, timing)?)?;
        let state = board.absorb(phases::typing(&state, &self.command, theme, timing)?)?;
        let state = board.absorb(phases::command_echo(&state, &self.command, theme, timing)?)?;
        let state = board.absorb(phases::banner(&state, &self.banner, timing)?)?;
        let mut state = board.absorb(phases::analyzing(&state, &self.analyzing, timing)?)?;

        for (i, phase) in self.phases.iter().enumerate() {
            let out = phases::work_phase(&state, phase, i > 0, theme, timing)?;
            tracing::debug!(phase = %phase.title, shots = out.shots.len(), "work phase");
            state = board.absorb(out)?;
        }

        let state = board.absorb(phases::summary(&state, &self.summary)?)?;
        board.hold_last(timing.final_hold_ms)?;

        tracing::debug!(shots = board.len(), lines = state.len(), "storyboard complete");
        Ok(board)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/demo.rs"]
mod tests;
