//! Phase transitions of the animation.
//!
//! Every phase is a pure function from the transcript it starts with (plus its script inputs) to
//! a [`PhaseOutput`]: the transcript it leaves behind and the shots it emitted, in order.

use crate::config::{Theme, Timing};
use crate::foundation::error::ReelResult;
use crate::script::line::{Line, Segment};
use crate::script::storyboard::{PhaseOutput, Shot};
use crate::script::transcript::Transcript;

/// Shell prompt drawn before the command.
pub const PROMPT: &str = "$ ";
/// Block cursor shown while the shell waits for input.
pub const CURSOR: &str = "\u{2588}";

const BRANCH: &str = "    \u{251c}\u{2500} ";
const BRANCH_LAST: &str = "    \u{2514}\u{2500} ";
const CHECK: &str = "\u{2713} ";
const HEADING: &str = "  \u{25a0} ";

/// A detail row under a work-phase heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    /// Segments drawn after the tree branch.
    pub segments: Vec<Segment>,
    /// How long the row is held once it appears.
    pub hold_ms: u32,
}

/// A named unit of simulated work: heading, detail rows, completion row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkPhase {
    /// Heading text.
    pub title: String,
    /// Rows revealed one by one.
    pub details: Vec<Detail>,
    /// Result shown on the completion row.
    pub done: String,
}

/// Lines revealed together, then held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Beat {
    /// Lines appended by the beat.
    pub lines: Vec<Line>,
    /// How long the resulting frame is held.
    pub hold_ms: u32,
}

/// The prompt line, optionally followed by typed text and the cursor block.
pub fn prompt_line(theme: &Theme, typed: &str, cursor: bool) -> Line {
    let mut segments = vec![Segment::new(PROMPT, theme.prompt)];
    if !typed.is_empty() {
        segments.push(Segment::new(typed, theme.text));
    }
    if cursor {
        segments.push(Segment::new(CURSOR, theme.white));
    }
    Line::Styled(segments)
}

/// Delay after typing `ch`.
///
/// The last character always gets the pre-submit hesitation; otherwise a space gets the longer
/// inter-word delay.
pub fn keystroke_delay(ch: char, is_last: bool, timing: &Timing) -> u32 {
    if is_last {
        timing.before_submit_ms
    } else if ch == ' ' {
        timing.after_space_ms
    } else {
        timing.keystroke_ms
    }
}

/// Alternate the prompt with and without the cursor, `timing.blink_repeats` times.
pub fn idle_blink(state: &Transcript, theme: &Theme, timing: &Timing) -> ReelResult<PhaseOutput> {
    let on = state.with_last(prompt_line(theme, "", true));
    let off = state.with_last(prompt_line(theme, "", false));

    let mut shots = Vec::with_capacity(timing.blink_repeats as usize * 2);
    for _ in 0..timing.blink_repeats {
        shots.push(Shot::new(on.clone(), timing.blink_on_ms)?);
        shots.push(Shot::new(off.clone(), timing.blink_off_ms)?);
    }
    let state = if shots.is_empty() { state.clone() } else { off };
    Ok(PhaseOutput { state, shots })
}

/// One shot per typed prefix of `command`, `1..=len` characters, each ending in the cursor.
pub fn typing(
    state: &Transcript,
    command: &str,
    theme: &Theme,
    timing: &Timing,
) -> ReelResult<PhaseOutput> {
    let chars: Vec<char> = command.chars().collect();
    let mut shots = Vec::with_capacity(chars.len());
    let mut current = state.clone();
    for i in 1..=chars.len() {
        let prefix: String = chars[..i].iter().collect();
        current = state.with_last(prompt_line(theme, &prefix, true));
        let delay = keystroke_delay(chars[i - 1], i == chars.len(), timing);
        shots.push(Shot::new(current.clone(), delay)?);
    }
    Ok(PhaseOutput {
        state: current,
        shots,
    })
}

/// The submitted command, cursor gone.
pub fn command_echo(
    state: &Transcript,
    command: &str,
    theme: &Theme,
    timing: &Timing,
) -> ReelResult<PhaseOutput> {
    let next = state.with_last(prompt_line(theme, command, false));
    Ok(PhaseOutput {
        shots: vec![Shot::new(next.clone(), timing.command_echo_ms)?],
        state: next,
    })
}

/// The tool banner, padded by blank rows.
pub fn banner(
    state: &Transcript,
    segments: &[Segment],
    timing: &Timing,
) -> ReelResult<PhaseOutput> {
    let next = state.extended([
        Line::blank(),
        Line::Styled(segments.to_vec()),
        Line::blank(),
    ]);
    Ok(PhaseOutput {
        shots: vec![Shot::new(next.clone(), timing.banner_ms)?],
        state: next,
    })
}

/// The "analyzing" status row, followed by a blank row.
pub fn analyzing(
    state: &Transcript,
    segments: &[Segment],
    timing: &Timing,
) -> ReelResult<PhaseOutput> {
    let next = state.extended([Line::Styled(segments.to_vec()), Line::blank()]);
    Ok(PhaseOutput {
        shots: vec![Shot::new(next.clone(), timing.analyzing_ms)?],
        state: next,
    })
}

/// Heading, then each detail row, then the completion row; one shot per step.
///
/// With `separated`, a blank row is printed together with the heading.
pub fn work_phase(
    state: &Transcript,
    phase: &WorkPhase,
    separated: bool,
    theme: &Theme,
    timing: &Timing,
) -> ReelResult<PhaseOutput> {
    let heading = Line::styled([(HEADING, theme.cyan), (phase.title.as_str(), theme.white)]);
    let mut current = if separated {
        state.extended([Line::blank(), heading])
    } else {
        state.pushed(heading)
    };

    let mut shots = Vec::with_capacity(phase.details.len() + 2);
    shots.push(Shot::new(current.clone(), timing.phase_header_ms)?);

    for detail in &phase.details {
        let mut segments = vec![Segment::new(BRANCH, theme.dim)];
        segments.extend(detail.segments.iter().cloned());
        current = current.pushed(Line::Styled(segments));
        shots.push(Shot::new(current.clone(), detail.hold_ms)?);
    }

    current = current.pushed(Line::styled([
        (BRANCH_LAST, theme.dim),
        (CHECK, theme.green),
        (phase.done.as_str(), theme.text),
    ]));
    shots.push(Shot::new(current.clone(), timing.phase_done_ms)?);

    Ok(PhaseOutput {
        state: current,
        shots,
    })
}

/// Reveal each beat's lines in turn, one shot per beat.
pub fn summary(state: &Transcript, beats: &[Beat]) -> ReelResult<PhaseOutput> {
    let mut current = state.clone();
    let mut shots = Vec::with_capacity(beats.len());
    for beat in beats {
        current = current.extended(beat.lines.iter().cloned());
        shots.push(Shot::new(current.clone(), beat.hold_ms)?);
    }
    Ok(PhaseOutput {
        state: current,
        shots,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/script/phases.rs"]
mod tests;
