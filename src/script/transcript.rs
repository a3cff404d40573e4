use std::sync::Arc;

use crate::script::line::Line;

/// Everything printed to the simulated terminal so far.
///
/// A transcript is a value: every operation returns a new version and leaves `self` untouched, so
/// a phase is a function from the prior transcript to the next one plus the frames it emitted.
/// Line count never shrinks; the only non-append edit is replacing the last line, which is how
/// in-place progress (the blinking prompt, a command being typed) is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Arc<[Line]>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in top-to-bottom order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when nothing has been printed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Last printed line, if any.
    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// A copy with `line` appended.
    pub fn pushed(&self, line: Line) -> Self {
        self.extended([line])
    }

    /// A copy with `lines` appended in order.
    pub fn extended(&self, lines: impl IntoIterator<Item = Line>) -> Self {
        let mut out = self.lines.to_vec();
        out.extend(lines);
        Self { lines: out.into() }
    }

    /// A copy whose last line is `line`; on an empty transcript this appends instead.
    pub fn with_last(&self, line: Line) -> Self {
        let mut out = self.lines.to_vec();
        match out.last_mut() {
            Some(last) => *last = line,
            None => out.push(line),
        }
        Self { lines: out.into() }
    }
}

impl FromIterator<Line> for Transcript {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect::<Vec<_>>().into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/transcript.rs"]
mod tests;
