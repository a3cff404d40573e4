use crate::foundation::core::FrameDuration;
use crate::foundation::error::{ReelError, ReelResult};
use crate::script::transcript::Transcript;

/// One frame-to-be: the transcript snapshot on screen and how long it is held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shot {
    /// What the frame shows.
    pub transcript: Transcript,
    /// How long the frame is shown.
    pub hold: FrameDuration,
}

impl Shot {
    /// Build a shot from a snapshot and a hold in milliseconds.
    pub fn new(transcript: Transcript, hold_ms: u32) -> ReelResult<Self> {
        Ok(Self {
            transcript,
            hold: FrameDuration::new(hold_ms)?,
        })
    }
}

/// Result of running one phase: the transcript it leaves behind and the shots it emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseOutput {
    /// Transcript after the phase.
    pub state: Transcript,
    /// Shots in playback order. May be empty.
    pub shots: Vec<Shot>,
}

/// Ordered shots of a whole animation, before any pixels exist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Storyboard {
    shots: Vec<Shot>,
}

impl Storyboard {
    /// An empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a phase's shots and hand back the transcript it left behind.
    ///
    /// Rejects shots that show fewer lines than an earlier shot. A rejected phase leaves the
    /// storyboard unchanged.
    pub fn absorb(&mut self, out: PhaseOutput) -> ReelResult<Transcript> {
        let mut floor = self.shots.last().map_or(0, |s| s.transcript.len());
        for (i, shot) in out.shots.iter().enumerate() {
            let len = shot.transcript.len();
            if len < floor {
                return Err(ReelError::validation(format!(
                    "shot {} shows {len} lines after a shot with {floor}",
                    self.shots.len() + i
                )));
            }
            floor = len;
        }
        self.shots.extend(out.shots);
        Ok(out.state)
    }

    /// Shots in playback order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// `true` when no shot was emitted.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Hold of every shot, in order.
    pub fn holds(&self) -> Vec<FrameDuration> {
        self.shots.iter().map(|s| s.hold).collect()
    }

    /// Replace the hold of the last shot.
    pub fn hold_last(&mut self, hold_ms: u32) -> ReelResult<()> {
        let hold = FrameDuration::new(hold_ms)?;
        let last = self
            .shots
            .last_mut()
            .ok_or_else(|| ReelError::validation("cannot hold the last shot of an empty storyboard"))?;
        last.hold = hold;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/storyboard.rs"]
mod tests;
