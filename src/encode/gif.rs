use std::io::Write;
use std::path::Path;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::sink::{FrameSink, SinkConfig, drain_sequence};
use crate::foundation::core::{Canvas, FrameDuration};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::{FrameRGBA, Sequence};

/// Sink that encodes frames into an animated GIF written to `W`.
///
/// The GIF trailer is written when the encoder is dropped in [`FrameSink::end`]; the writer is
/// released at that point.
pub struct GifSink<W: Write> {
    writer: Option<W>,
    encoder: Option<GifEncoder<W>>,
    speed: i32,
    cfg: Option<SinkConfig>,
    last_idx: Option<usize>,
    written: usize,
}

impl<W: Write> GifSink<W> {
    /// Create a sink over `writer`. `speed` trades palette quality for time, `1..=30`.
    pub fn new(writer: W, speed: i32) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            speed,
            cfg: None,
            last_idx: None,
            written: 0,
        }
    }

    /// Frames encoded so far.
    pub fn frames_written(&self) -> usize {
        self.written
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        Canvas::new(cfg.width, cfg.height)?;
        if !(1..=30).contains(&self.speed) {
            return Err(ReelError::validation("gif encoder speed must be in 1..=30"));
        }
        let writer = self
            .writer
            .take()
            .ok_or_else(|| ReelError::encode("gif sink already started"))?;

        let mut encoder = GifEncoder::new_with_speed(writer, self.speed);
        if cfg.loop_forever {
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| ReelError::encode(format!("failed to set loop count: {e}")))?;
        }

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written = 0;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: usize,
        frame: &FrameRGBA,
        hold: FrameDuration,
    ) -> ReelResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| ReelError::encode("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(ReelError::encode("gif sink received out-of-order frame index"));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ReelError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(ReelError::encode("gif sink is already finalized"));
        };

        let delay = Delay::from_numer_denom_ms(hold.as_millis(), 1);
        encoder
            .encode_frame(Frame::from_parts(frame.to_rgba_image()?, 0, 0, delay))
            .map_err(|e| ReelError::encode(format!("failed to encode frame {idx}: {e}")))?;

        self.last_idx = Some(idx);
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| ReelError::encode("gif sink not started"))?;
        drop(encoder);
        self.cfg = None;
        if self.written == 0 {
            return Err(ReelError::encode("gif has no frames"));
        }
        Ok(())
    }
}

/// Encode `seq` into an infinitely looping GIF held in memory.
pub fn encode_gif(seq: &Sequence, speed: i32) -> ReelResult<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes, speed);
        drain_sequence(seq, &mut sink)?;
    }
    Ok(bytes)
}

/// Encode `seq` and write it to `path`, replacing any existing file. Returns the byte size.
#[tracing::instrument(skip(seq), fields(frames = seq.len()))]
pub fn save_gif(seq: &Sequence, path: &Path, speed: i32) -> ReelResult<u64> {
    let bytes = encode_gif(seq, speed)?;
    write_artifact(path, &bytes)?;
    tracing::info!(bytes = bytes.len(), path = %path.display(), "gif written");
    Ok(bytes.len() as u64)
}

/// Write `bytes` to `path`, creating parent directories first.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> ReelResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
