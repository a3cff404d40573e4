use crate::foundation::core::FrameDuration;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::{FrameRGBA, Sequence};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Loop forever when played back.
    pub loop_forever: bool,
}

/// Sink contract for consuming frames in playback order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Push one frame with its display time.
    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA, hold: FrameDuration)
    -> ReelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ReelResult<()>;
}

/// Stream a whole sequence through `sink`, looping forever.
#[tracing::instrument(skip_all, fields(frames = seq.len()))]
pub fn drain_sequence(seq: &Sequence, sink: &mut dyn FrameSink) -> ReelResult<()> {
    if seq.is_empty() {
        return Err(ReelError::validation("cannot encode an empty sequence"));
    }
    let canvas = seq.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        loop_forever: true,
    })?;
    for (idx, tf) in seq.frames().iter().enumerate() {
        sink.push_frame(idx, &tf.frame, tf.hold)?;
    }
    sink.end()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, FrameRGBA, FrameDuration)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(usize, FrameRGBA, FrameDuration)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: usize,
        frame: &FrameRGBA,
        hold: FrameDuration,
    ) -> ReelResult<()> {
        self.frames.push((idx, frame.clone(), hold));
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
